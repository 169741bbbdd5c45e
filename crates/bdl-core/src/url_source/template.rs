//! Template mode: `https://host/img_{%03d}.jpg` expanded over an inclusive range.

use super::pattern::NumberPattern;
use super::TemplateError;

const BEGIN: char = '{';
const END: char = '}';

/// A URL template split into literal prefix, number pattern and literal suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    prefix: String,
    pattern: NumberPattern,
    suffix: String,
}

impl UrlTemplate {
    /// Parses a template containing exactly one `{pattern}` placeholder.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let begin = template.find(BEGIN);
        let end = template.find(END);
        let (begin, end) = match (begin, end) {
            (Some(b), Some(e)) => (b, e),
            _ => return Err(TemplateError::MissingPlaceholder(template.to_string())),
        };
        if end < begin {
            return Err(TemplateError::MisorderedPlaceholder(template.to_string()));
        }

        let suffix = &template[end + END.len_utf8()..];
        if suffix.contains(BEGIN) || suffix.contains(END) || template[..end].matches(BEGIN).count() > 1 {
            return Err(TemplateError::MultiplePlaceholders(template.to_string()));
        }

        let pattern = NumberPattern::parse(&template[begin + BEGIN.len_utf8()..end])?;
        Ok(Self {
            prefix: template[..begin].to_string(),
            pattern,
            suffix: suffix.to_string(),
        })
    }

    /// Renders the URL for one index.
    pub fn render(&self, n: u64) -> String {
        format!("{}{}{}", self.prefix, self.pattern.format(n), self.suffix)
    }

    /// Renders every index in `from..=to` in increasing order. Empty when `from > to`.
    pub fn expand(&self, from: u64, to: u64) -> Vec<String> {
        (from..=to).map(|n| self.render(n)).collect()
    }
}

/// Validates raw range bounds as given on the command line.
pub fn check_bounds(from: Option<i64>, to: Option<i64>) -> Result<(u64, u64), TemplateError> {
    let from = from.ok_or(TemplateError::MissingBound("from"))?;
    let to = to.ok_or(TemplateError::MissingBound("to"))?;
    let from = u64::try_from(from).map_err(|_| TemplateError::NegativeBound {
        name: "from",
        value: from,
    })?;
    let to = u64::try_from(to).map_err(|_| TemplateError::NegativeBound { name: "to", value: to })?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_inclusive_range_in_order() {
        let t = UrlTemplate::parse("https://example.com/img_{%03d}.jpg").unwrap();
        let urls = t.expand(8, 11);
        assert_eq!(
            urls,
            vec![
                "https://example.com/img_008.jpg",
                "https://example.com/img_009.jpg",
                "https://example.com/img_010.jpg",
                "https://example.com/img_011.jpg",
            ]
        );
    }

    #[test]
    fn count_is_to_minus_from_plus_one() {
        let t = UrlTemplate::parse("http://h/{%d}").unwrap();
        for (from, to) in [(0u64, 0u64), (0, 9), (5, 5), (3, 100)] {
            let urls = t.expand(from, to);
            assert_eq!(urls.len() as u64, to - from + 1);
            assert_eq!(urls[0], format!("http://h/{}", from));
            assert_eq!(urls.last().unwrap(), &format!("http://h/{}", to));
        }
    }

    #[test]
    fn reversed_range_is_empty() {
        let t = UrlTemplate::parse("http://h/{%d}.png").unwrap();
        assert!(t.expand(10, 9).is_empty());
    }

    #[test]
    fn placeholder_at_edges() {
        let t = UrlTemplate::parse("{%d}").unwrap();
        assert_eq!(t.render(4), "4");
        let t = UrlTemplate::parse("http://h/{%02d}").unwrap();
        assert_eq!(t.render(4), "http://h/04");
    }

    #[test]
    fn rejects_missing_or_broken_placeholders() {
        assert!(matches!(
            UrlTemplate::parse("http://h/a.png"),
            Err(TemplateError::MissingPlaceholder(_))
        ));
        assert!(matches!(
            UrlTemplate::parse("http://h/{%d.png"),
            Err(TemplateError::MissingPlaceholder(_))
        ));
        assert!(matches!(
            UrlTemplate::parse("http://h/}%d{.png"),
            Err(TemplateError::MisorderedPlaceholder(_))
        ));
        assert!(matches!(
            UrlTemplate::parse("http://h/{%d}/{%d}"),
            Err(TemplateError::MultiplePlaceholders(_))
        ));
        assert!(matches!(
            UrlTemplate::parse("http://h/{{%d}"),
            Err(TemplateError::MultiplePlaceholders(_))
        ));
    }

    #[test]
    fn bounds_must_be_present_and_non_negative() {
        assert_eq!(check_bounds(Some(1), Some(3)).unwrap(), (1, 3));
        assert!(matches!(
            check_bounds(None, Some(3)),
            Err(TemplateError::MissingBound("from"))
        ));
        assert!(matches!(
            check_bounds(Some(1), None),
            Err(TemplateError::MissingBound("to"))
        ));
        assert!(matches!(
            check_bounds(Some(-1), Some(3)),
            Err(TemplateError::NegativeBound { name: "from", value: -1 })
        ));
        assert!(matches!(
            check_bounds(Some(0), Some(-2)),
            Err(TemplateError::NegativeBound { name: "to", value: -2 })
        ));
    }
}
