use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub header_accent_fg: Color,
    pub header_accent_bg: Color,
    pub gauge_cpu: Color,
    pub gauge_memory: Color,
    pub gauge_unfilled: Color,
    pub table_header: Color,
    pub row_alt_bg: Color,
    pub statusbar_bg: Color,
    pub status_ok: Color,
    pub status_err: Color,
    pub pill_key_fg: Color,
    pub pill_key_bg: Color,
    pub pill_desc_fg: Color,
    pub prompt: Color,
}

impl Theme {
    pub fn from_config(name: &str) -> Self {
        match ThemeKind::from_config_str(name) {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Theme {
            kind: ThemeKind::Dark,
            text_primary: Color::Rgb(0xcd, 0xd6, 0xf4),
            text_secondary: Color::Rgb(0xa6, 0xad, 0xc8),
            border: Color::Rgb(0x58, 0x5b, 0x70),
            header_accent_fg: Color::Rgb(0x1e, 0x1e, 0x2e),
            header_accent_bg: Color::Rgb(0x89, 0xb4, 0xfa),
            gauge_cpu: Color::Rgb(0xfa, 0xb3, 0x87),
            gauge_memory: Color::Rgb(0xa6, 0xe3, 0xa1),
            gauge_unfilled: Color::Rgb(0x31, 0x32, 0x44),
            table_header: Color::Rgb(0xcb, 0xa6, 0xf7),
            row_alt_bg: Color::Rgb(0x24, 0x24, 0x36),
            statusbar_bg: Color::Rgb(0x18, 0x18, 0x25),
            status_ok: Color::Rgb(0xa6, 0xe3, 0xa1),
            status_err: Color::Rgb(0xf3, 0x8b, 0xa8),
            pill_key_fg: Color::Rgb(0x1e, 0x1e, 0x2e),
            pill_key_bg: Color::Rgb(0xb4, 0xbe, 0xfe),
            pill_desc_fg: Color::Rgb(0xba, 0xc2, 0xde),
            prompt: Color::Rgb(0xf9, 0xe2, 0xaf),
        }
    }

    pub fn light() -> Self {
        Theme {
            kind: ThemeKind::Light,
            text_primary: Color::Rgb(0x4c, 0x4f, 0x69),
            text_secondary: Color::Rgb(0x6c, 0x6f, 0x85),
            border: Color::Rgb(0xac, 0xb0, 0xbe),
            header_accent_fg: Color::Rgb(0xef, 0xf1, 0xf5),
            header_accent_bg: Color::Rgb(0x1e, 0x66, 0xf5),
            gauge_cpu: Color::Rgb(0xfe, 0x64, 0x0b),
            gauge_memory: Color::Rgb(0x40, 0xa0, 0x2b),
            gauge_unfilled: Color::Rgb(0xcc, 0xd0, 0xda),
            table_header: Color::Rgb(0x88, 0x39, 0xef),
            row_alt_bg: Color::Rgb(0xe6, 0xe9, 0xef),
            statusbar_bg: Color::Rgb(0xdc, 0xe0, 0xe8),
            status_ok: Color::Rgb(0x40, 0xa0, 0x2b),
            status_err: Color::Rgb(0xd2, 0x0f, 0x39),
            pill_key_fg: Color::Rgb(0xef, 0xf1, 0xf5),
            pill_key_bg: Color::Rgb(0x72, 0x87, 0xfd),
            pill_desc_fg: Color::Rgb(0x5c, 0x5f, 0x77),
            prompt: Color::Rgb(0xdf, 0x8e, 0x1d),
        }
    }
}
