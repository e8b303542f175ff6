//! Line scanner that strips embedded style blocks.
//!
//! A two-state machine over the document's lines: `Passthrough` emits
//! lines, `Suppressing` drops them. The exact opening tag switches to
//! `Suppressing` (emitting the replacement link instead), the exact
//! closing tag switches back. The closing tag line is never emitted,
//! even when encountered outside a style block.

use crate::Rewrite;

/// Exact opening tag the documentation compiler embeds.
const STYLE_OPEN: &str = "<style type=\"text/css\" >";

/// Exact closing tag of the embedded style block.
const STYLE_CLOSE: &str = "</style>";

/// Replacement emitted in place of the opening tag.
const STYLESHEET_LINK: &str =
    "<link href=\"https://maxcdn.bootstrapcdn.com/bootstrap/3.3.6/css/bootstrap.min.css\" rel=stylesheet>";

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Lines are emitted to the output.
    Passthrough,
    /// Lines are dropped until the closing tag.
    Suppressing,
}

/// Run the scanner over `\n`-delimited lines, rejoining with `\n`.
pub(crate) fn rewrite_lines(input: &str) -> Rewrite {
    let mut out: Vec<&str> = Vec::new();
    let mut state = ScanState::Passthrough;
    let mut blocks_replaced = 0;

    for line in input.lines() {
        if line == STYLE_OPEN {
            out.push(STYLESHEET_LINK);
            state = ScanState::Suppressing;
            blocks_replaced += 1;
        } else if line == STYLE_CLOSE {
            // Always clears suppression and is never emitted, even when
            // the scanner was already passing lines through.
            state = ScanState::Passthrough;
        } else if state == ScanState::Passthrough {
            out.push(line);
        }
    }

    Rewrite {
        html: out.join("\n"),
        blocks_replaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_body_is_suppressed() {
        let input = "before\n<style type=\"text/css\" >\n.a{}\n.b{}\n</style>\nafter";
        let result = rewrite_lines(input);

        assert_eq!(
            result.html,
            format!("before\n{STYLESHEET_LINK}\nafter")
        );
        assert_eq!(result.blocks_replaced, 1);
    }

    #[test]
    fn opening_tag_must_match_exactly() {
        // Different attribute spacing does not trigger the rewrite.
        let input = "<style type=\"text/css\">\nbody{}\n</style>";
        let result = rewrite_lines(input);

        assert_eq!(result.blocks_replaced, 0);
        // The opening line and body survive; the exact closing tag is
        // still dropped unconditionally.
        assert_eq!(result.html, "<style type=\"text/css\">\nbody{}");
    }

    #[test]
    fn stray_closing_tag_is_dropped() {
        let input = "<p>a</p>\n</style>\n<p>b</p>";
        let result = rewrite_lines(input);

        assert_eq!(result.html, "<p>a</p>\n<p>b</p>");
        assert_eq!(result.blocks_replaced, 0);
    }

    #[test]
    fn unterminated_block_suppresses_to_end() {
        let input = "keep\n<style type=\"text/css\" >\nnever\nemitted";
        let result = rewrite_lines(input);

        assert_eq!(result.html, format!("keep\n{STYLESHEET_LINK}"));
        assert_eq!(result.blocks_replaced, 1);
    }

    #[test]
    fn multiple_blocks_each_replaced() {
        let input = "\
<style type=\"text/css\" >\na{}\n</style>\nmiddle\n<style type=\"text/css\" >\nb{}\n</style>";
        let result = rewrite_lines(input);

        assert_eq!(result.blocks_replaced, 2);
        assert_eq!(
            result.html,
            format!("{STYLESHEET_LINK}\nmiddle\n{STYLESHEET_LINK}")
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        let result = rewrite_lines("");
        assert_eq!(result.html, "");
        assert_eq!(result.blocks_replaced, 0);
    }
}
