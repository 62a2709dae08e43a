// SPDX-License-Identifier: MPL-2.0
//! Localized default titles and button captions.

use super::severity::Severity;
use crate::i18n::fluent::I18n;

/// Texts the manager and overlay use when the caller gives none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub success: String,
    pub error: String,
    pub warning: String,
    pub info: String,
    pub confirm: String,
    pub ok: String,
    pub cancel: String,
    pub close: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            success: "Success".to_string(),
            error: "Error".to_string(),
            warning: "Warning".to_string(),
            info: "Info".to_string(),
            confirm: "Confirm".to_string(),
            ok: "OK".to_string(),
            cancel: "Cancel".to_string(),
            close: "Close".to_string(),
        }
    }
}

impl Labels {
    /// Builds the labels for the current locale of `i18n`.
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            success: i18n.tr(Severity::Success.title_key()),
            error: i18n.tr(Severity::Error.title_key()),
            warning: i18n.tr(Severity::Warning.title_key()),
            info: i18n.tr(Severity::Info.title_key()),
            confirm: i18n.tr("notice-title-confirm"),
            ok: i18n.tr("notice-button-ok"),
            cancel: i18n.tr("notice-button-cancel"),
            close: i18n.tr("notice-button-close"),
        }
    }

    /// Title the convenience helpers use for `severity`.
    #[must_use]
    pub fn title_for(&self, severity: Severity) -> &str {
        match severity {
            Severity::Success => &self.success,
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Info => &self.info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn english_labels_match_defaults() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(Labels::from_i18n(&i18n), Labels::default());
    }

    #[test]
    fn turkish_labels() {
        let i18n = I18n::new(Some("tr".to_string()), &Config::default());
        let labels = Labels::from_i18n(&i18n);
        assert_eq!(labels.title_for(Severity::Success), "Başarılı");
        assert_eq!(labels.title_for(Severity::Error), "Hata");
        assert_eq!(labels.title_for(Severity::Warning), "Uyarı");
        assert_eq!(labels.title_for(Severity::Info), "Bilgi");
        assert_eq!(labels.confirm, "Onay");
        assert_eq!(labels.ok, "Tamam");
        assert_eq!(labels.cancel, "İptal");
    }
}
