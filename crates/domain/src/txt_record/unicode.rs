//! UTF-8 and control-character policy for textual tag values.

/// Advisory and blocking findings for one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnicodeReport {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl UnicodeReport {
    pub fn is_blocking(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub fn check(bytes: &[u8]) -> UnicodeReport {
    let mut report = UnicodeReport::default();

    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            report.errors.push(format!(
                "content is not valid UTF-8 (first bad byte at index {}); UTF-8 is RECOMMENDED for text content",
                e.valid_up_to()
            ));
            return report;
        }
    };

    for (offset, ch) in text.char_indices() {
        let cp = u32::from(ch);

        if cp <= 0x1f || cp == 0x7f {
            if matches!(ch, '\t' | '\n' | '\r') {
                report.warnings.push(format!(
                    "contains control character U+{cp:04X} at byte index {offset} (TAB/CR/LF are allowed but best avoided)"
                ));
            } else {
                report.errors.push(format!(
                    "contains disallowed control character U+{cp:04X} at byte index {offset}"
                ));
            }
        }

        if (0x80..=0x9f).contains(&cp) {
            report.errors.push(format!(
                "contains C1 control U+{cp:04X} at byte index {offset}; C1 controls are not permitted"
            ));
        }

        if is_noncharacter(cp) {
            report.warnings.push(format!(
                "contains Unicode noncharacter U+{cp:04X} at byte index {offset}; noncharacters are discouraged for interchange"
            ));
        }
    }

    report
}

fn is_noncharacter(cp: u32) -> bool {
    (0xfdd0..=0xfdef).contains(&cp) || cp & 0xfffe == 0xfffe
}
