use crate::domain::model::CommandSequence;

/// 以單一換行串接；空字串是刻意的分隔行，原樣保留，結尾不加換行
pub fn assemble(lines: &[String]) -> String {
    lines.join("\n")
}

impl CommandSequence {
    pub fn assemble(&self) -> String {
        assemble(self.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_preserved() {
        let lines = vec![
            "config".to_string(),
            String::new(),
            "quit".to_string(),
        ];
        assert_eq!(assemble(&lines), "config\n\nquit");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(assemble(&[]), "");
        assert_eq!(CommandSequence::from(Vec::new()).assemble(), "");
    }
}
