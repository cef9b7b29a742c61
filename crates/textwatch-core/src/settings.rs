//! Persisted user settings abstraction.

use crate::{
    phrase::Language,
    render::{TextAlignment, VisualStyle},
};

/// Keys shared by the persisted record and preference updates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingKey {
    Invert = 0,
    TextAlign = 1,
    Language = 2,
}

impl SettingKey {
    pub const COUNT: usize = 3;

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Invert),
            1 => Some(Self::TextAlign),
            2 => Some(Self::Language),
            _ => None,
        }
    }
}

/// User-tunable settings that should survive reboot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WatchSettings {
    pub style: VisualStyle,
    pub language: Language,
}

impl WatchSettings {
    pub const fn new(style: VisualStyle, language: Language) -> Self {
        Self { style, language }
    }

    /// Apply one key/value preference update. Returns whether anything
    /// changed.
    pub fn apply(&mut self, key: SettingKey, value: u8) -> bool {
        let before = *self;
        match key {
            SettingKey::Invert => self.style.inverted = value == 1,
            SettingKey::TextAlign => self.style.alignment = TextAlignment::from_code(value),
            SettingKey::Language => self.language = Language::from_code(value),
        }
        *self != before
    }

    /// Record layout: one byte per [`SettingKey`], indexed by key.
    pub fn to_bytes(self) -> [u8; SettingKey::COUNT] {
        let mut bytes = [0u8; SettingKey::COUNT];
        bytes[SettingKey::Invert as usize] = u8::from(self.style.inverted);
        bytes[SettingKey::TextAlign as usize] = self.style.alignment.code();
        bytes[SettingKey::Language as usize] = self.language.code();
        bytes
    }

    pub fn from_bytes(bytes: [u8; SettingKey::COUNT]) -> Self {
        let mut settings = Self::default();
        for (index, value) in bytes.into_iter().enumerate() {
            if let Some(key) = SettingKey::from_code(index as u32) {
                settings.apply(key, value);
            }
        }
        settings
    }
}

/// Abstract settings persistence backend.
pub trait SettingsStore {
    type Error;

    fn load(&mut self) -> Result<Option<WatchSettings>, Self::Error>;
    fn save(&mut self, settings: &WatchSettings) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MemoryStore {
        record: Option<[u8; SettingKey::COUNT]>,
    }

    impl SettingsStore for MemoryStore {
        type Error = ();

        fn load(&mut self) -> Result<Option<WatchSettings>, Self::Error> {
            Ok(self.record.map(WatchSettings::from_bytes))
        }

        fn save(&mut self, settings: &WatchSettings) -> Result<(), Self::Error> {
            self.record = Some(settings.to_bytes());
            Ok(())
        }
    }

    #[test]
    fn defaults_are_left_aligned_english() {
        let settings = WatchSettings::default();
        assert_eq!(settings.style.alignment, TextAlignment::Left);
        assert!(!settings.style.inverted);
        assert_eq!(settings.language, Language::English);
    }

    #[test]
    fn store_keeps_saved_settings() {
        let mut store = MemoryStore { record: None };
        assert_eq!(store.load(), Ok(None));

        let settings = WatchSettings::new(
            VisualStyle {
                alignment: TextAlignment::Right,
                inverted: true,
            },
            Language::Galician,
        );
        store.save(&settings).unwrap();
        assert_eq!(store.load(), Ok(Some(settings)));
    }

    #[test]
    fn apply_reports_changes_only() {
        let mut settings = WatchSettings::default();
        assert!(settings.apply(SettingKey::Invert, 1));
        assert!(!settings.apply(SettingKey::Invert, 1));
        assert!(settings.apply(SettingKey::TextAlign, 0));
        assert_eq!(settings.style.alignment, TextAlignment::Center);
    }

    #[test]
    fn garbage_bytes_decode_to_fallbacks() {
        let settings = WatchSettings::from_bytes([9, 9, 9]);
        assert!(!settings.style.inverted);
        assert_eq!(settings.style.alignment, TextAlignment::Center);
        assert_eq!(settings.language, Language::English);
    }
}
