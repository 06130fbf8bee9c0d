use crate::preferences::Language;

pub fn window_title(language: Language) -> &'static str {
    match language {
        Language::English => "ResearchDesk",
        Language::Chinese => "ResearchDesk",
    }
}

pub fn app_title(language: Language) -> &'static str {
    match language {
        Language::English => "ResearchDesk",
        Language::Chinese => "研究台 ResearchDesk",
    }
}

pub fn topic_label(language: Language) -> &'static str {
    match language {
        Language::English => "Topic",
        Language::Chinese => "主题",
    }
}

pub fn topic_placeholder(language: Language) -> &'static str {
    match language {
        Language::English => "What should be researched?",
        Language::Chinese => "要研究什么？",
    }
}

pub fn steps_label(language: Language) -> &'static str {
    match language {
        Language::English => "Steps",
        Language::Chinese => "步数",
    }
}

pub fn steps_placeholder(language: Language) -> &'static str {
    match language {
        Language::English => "auto",
        Language::Chinese => "自动",
    }
}

pub fn submit_button(language: Language) -> &'static str {
    match language {
        Language::English => "Research",
        Language::Chinese => "开始研究",
    }
}

pub fn clear_button(language: Language) -> &'static str {
    match language {
        Language::English => "Clear",
        Language::Chinese => "清除",
    }
}

pub fn report_label(language: Language) -> &'static str {
    match language {
        Language::English => "Report",
        Language::Chinese => "研究报告",
    }
}

pub fn copy_report_button(language: Language) -> &'static str {
    match language {
        Language::English => "Copy report",
        Language::Chinese => "复制报告",
    }
}

pub fn copy_ack_label(language: Language) -> &'static str {
    match language {
        Language::English => "Copied!",
        Language::Chinese => "已复制！",
    }
}

pub fn save_report_button(language: Language) -> &'static str {
    match language {
        Language::English => "Save report",
        Language::Chinese => "保存报告",
    }
}

pub fn saved_to_label(language: Language) -> &'static str {
    match language {
        Language::English => "Saved to",
        Language::Chinese => "已保存到",
    }
}

pub fn settings_button(language: Language) -> &'static str {
    match language {
        Language::English => "Settings",
        Language::Chinese => "设置",
    }
}

pub fn settings_title(language: Language) -> &'static str {
    match language {
        Language::English => "Settings",
        Language::Chinese => "设置",
    }
}

pub fn endpoint_label(language: Language) -> &'static str {
    match language {
        Language::English => "Service URL",
        Language::Chinese => "服务地址",
    }
}

pub fn timeout_label(language: Language) -> &'static str {
    match language {
        Language::English => "Timeout (s)",
        Language::Chinese => "超时（秒）",
    }
}

pub fn theme_label(language: Language) -> &'static str {
    match language {
        Language::English => "Theme",
        Language::Chinese => "主题样式",
    }
}

pub fn language_label(language: Language) -> &'static str {
    match language {
        Language::English => "Language",
        Language::Chinese => "语言",
    }
}

pub fn save_button(language: Language) -> &'static str {
    match language {
        Language::English => "Save",
        Language::Chinese => "保存",
    }
}

pub fn cancel_button(language: Language) -> &'static str {
    match language {
        Language::English => "Cancel",
        Language::Chinese => "取消",
    }
}

pub fn dismiss_button(language: Language) -> &'static str {
    match language {
        Language::English => "Dismiss",
        Language::Chinese => "关闭",
    }
}

pub fn status_ready(language: Language) -> &'static str {
    match language {
        Language::English => "Ready",
        Language::Chinese => "就绪",
    }
}

pub fn status_loading(language: Language) -> &'static str {
    match language {
        Language::English => "Researching, this can take a few minutes",
        Language::Chinese => "正在研究，可能需要几分钟",
    }
}

pub fn status_success(language: Language) -> &'static str {
    match language {
        Language::English => "Research complete",
        Language::Chinese => "研究完成",
    }
}

pub fn status_failed(language: Language) -> &'static str {
    match language {
        Language::English => "Research failed",
        Language::Chinese => "研究失败",
    }
}

pub fn missing_topic_error(language: Language) -> &'static str {
    match language {
        Language::English => "Enter a topic before starting a research run",
        Language::Chinese => "请先输入研究主题",
    }
}

pub fn no_report_error(language: Language) -> &'static str {
    match language {
        Language::English => "No report available yet. Run a research request first.",
        Language::Chinese => "还没有报告，请先运行一次研究。",
    }
}

pub fn invalid_endpoint(language: Language) -> &'static str {
    match language {
        Language::English => "Service URL must start with http:// or https://",
        Language::Chinese => "服务地址必须以 http:// 或 https:// 开头",
    }
}

pub fn invalid_timeout(language: Language) -> &'static str {
    match language {
        Language::English => "Timeout must be a positive number of seconds",
        Language::Chinese => "超时必须是正整数秒",
    }
}

pub fn config_load_failed(language: Language) -> &'static str {
    match language {
        Language::English => "Could not load saved preferences",
        Language::Chinese => "无法加载已保存的设置",
    }
}

pub fn config_store_failed(language: Language) -> &'static str {
    match language {
        Language::English => "Could not save preferences",
        Language::Chinese => "无法保存设置",
    }
}
