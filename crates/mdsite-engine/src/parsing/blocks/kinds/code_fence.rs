/// Fenced code block type with owned delimiter constant.
///
/// A code block is a whole block that both starts and ends with a triple
/// backtick. The fence lines are dropped and the body is kept verbatim: no
/// inline parsing happens inside.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// Returns the code between the fences.
    ///
    /// The first and last lines are dropped (an info string on the opening
    /// fence goes with it). A single-line block like "```x```" has its
    /// backticks and surrounding whitespace trimmed instead.
    pub fn body(block: &str) -> String {
        let lines: Vec<&str> = block.split('\n').collect();
        if lines.len() >= 2 {
            lines[1..lines.len() - 1].join("\n")
        } else {
            block.trim_matches('`').trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fenced_block() {
        assert!(CodeFence::is_fenced("```\ncode\n```"));
        assert!(CodeFence::is_fenced("```rust\nlet x = 1;\n```"));
    }

    #[test]
    fn unclosed_fence_is_not_code() {
        assert!(!CodeFence::is_fenced("```\ncode"));
        assert!(!CodeFence::is_fenced("~~~\ncode\n~~~"));
    }

    #[test]
    fn body_drops_fence_lines() {
        assert_eq!(CodeFence::body("```rust\nfn main() {}\n\n  x\n```"), "fn main() {}\n\n  x");
    }

    #[test]
    fn empty_fence_has_empty_body() {
        assert_eq!(CodeFence::body("```\n```"), "");
    }

    #[test]
    fn single_line_fence_is_trimmed() {
        assert_eq!(CodeFence::body("``` inline ```"), "inline");
        assert_eq!(CodeFence::body("```"), "");
    }
}
