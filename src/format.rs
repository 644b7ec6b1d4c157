//! Display formatting for population figures

use crate::models::Population;

/// Group digits in threes with commas (en-US), e.g. 578803 -> "578,803"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Row/detail subtitle, e.g. "Population: 578,803" or "Population: Unknown"
pub fn population_label(population: &Population) -> String {
    format!("Population: {}", population)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(7), "7");
        assert_eq!(format_thousands(999), "999");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(578803), "578,803");
        assert_eq!(format_thousands(39029342), "39,029,342");
        assert_eq!(format_thousands(100000000), "100,000,000");
    }

    #[test]
    fn test_population_label() {
        assert_eq!(population_label(&Population::Known(578803)), "Population: 578,803");
        assert_eq!(population_label(&Population::Unknown), "Population: Unknown");
    }
}
