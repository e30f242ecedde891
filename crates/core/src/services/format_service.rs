use crate::models::settings::Settings;

const NBSP: char = '\u{a0}';

/// Formats amounts for display inside messages.
///
/// Full form: symbol, no-break space, two decimals with grouped thousands
/// (`R$ 1.234,56` with the default settings). Compact form abbreviates
/// values of 1000 or more as thousands with one decimal (`R$ 1.2k`).
#[derive(Debug, Clone)]
pub struct FormatService {
    settings: Settings,
}

impl FormatService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn currency(&self, value: f64) -> String {
        let fixed = format!("{:.2}", Self::round_to(value, 2).abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

        let mut out = String::with_capacity(fixed.len() + 8);
        out.push_str(&self.settings.currency_symbol);
        out.push(NBSP);
        if negative {
            out.push('-');
        }
        out.push_str(&self.group_thousands(int_part));
        out.push(self.settings.decimal_separator);
        out.push_str(frac_part);
        out
    }

    /// Short form for tight spaces (chart axes, header tiles).
    /// The abbreviation always uses `.` as decimal point.
    pub fn compact(&self, value: f64) -> String {
        let symbol = &self.settings.currency_symbol;
        if value.abs() >= 1000.0 {
            format!("{symbol}{NBSP}{:.1}k", Self::round_to(value / 1000.0, 1))
        } else {
            format!("{symbol}{NBSP}{:.0}", Self::round_to(value, 0))
        }
    }

    /// Round half away from zero to `decimals` places; `{:.N}` alone
    /// rounds ties to even. Never returns negative zero.
    fn round_to(value: f64, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        (value * scale).round() / scale + 0.0
    }

    fn group_thousands(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.settings.thousands_separator);
            }
            out.push(ch);
        }
        out
    }
}

impl Default for FormatService {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
