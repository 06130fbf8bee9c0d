use crate::config::Conf;
use crate::preferences::Language;
use crate::translations;

#[derive(Debug, Clone)]
pub struct SettingsForm {
    endpoint: String,
    timeout: String,
}

impl SettingsForm {
    pub fn from_conf(conf: &Conf) -> Self {
        Self {
            endpoint: conf.endpoint.clone(),
            timeout: conf.timeout.to_string(),
        }
    }

    pub fn apply(&self, conf: &mut Conf, language: Language) -> Result<(), String> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() || !endpoint.starts_with("http") {
            return Err(translations::invalid_endpoint(language).to_string());
        }

        let timeout = self
            .timeout
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or_else(|| translations::invalid_timeout(language).to_string())?;

        conf.endpoint = endpoint.trim_end_matches('/').to_string();
        conf.timeout = timeout;
        Ok(())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> &str {
        &self.timeout
    }

    pub fn set_endpoint(&mut self, value: String) {
        self.endpoint = value;
    }

    pub fn set_timeout(&mut self, value: String) {
        self.timeout = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_or_non_http_endpoints() {
        let mut conf = Conf::default();
        let mut form = SettingsForm::from_conf(&conf);

        form.set_endpoint("   ".to_string());
        assert!(form.apply(&mut conf, Language::English).is_err());

        form.set_endpoint("ftp://example.com".to_string());
        assert!(form.apply(&mut conf, Language::English).is_err());
    }

    #[test]
    fn accepts_valid_settings_and_normalizes_endpoint() {
        let mut conf = Conf::default();
        let mut form = SettingsForm::from_conf(&conf);

        form.set_endpoint("https://research.example.com/".to_string());
        form.set_timeout(" 120 ".to_string());
        form.apply(&mut conf, Language::English).expect("apply");

        assert_eq!(conf.endpoint, "https://research.example.com");
        assert_eq!(conf.timeout, 120);
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut conf = Conf::default();
        let mut form = SettingsForm::from_conf(&conf);

        form.set_timeout("0".to_string());
        assert!(form.apply(&mut conf, Language::English).is_err());
    }
}
