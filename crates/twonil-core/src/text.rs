//! Printable-byte filtering and the player-name tokenizer
//!
//! The player names in the file are stored as one glued run of text with no
//! reliable separators. Tokenization is a pure two-phase transform: split the
//! filtered text at separators and CamelCase boundaries, then re-merge
//! standalone "Mc"/"Mac" fragments with their successor. The phases are kept
//! separate so the precedence between the two rules is auditable.

/// Byte values allowed in decoded names: ASCII letters plus the few
/// punctuation marks that occur in team and player names.
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b' ' | b'\'' | b'-' | b'.')
}

/// Decode raw bytes to text, dropping everything outside the name alphabet.
///
/// Dropped bytes are removed, not replaced, so fragments that were separated
/// only by control bytes come out glued. The tokenizer deals with that.
pub fn decode_name_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .copied()
        .filter(|&b| is_name_byte(b))
        .map(char::from)
        .collect()
}

/// Surname prefixes that must not be split from the rest of the name.
const SURNAME_PREFIXES: [&str; 2] = ["Mc", "Mac"];

fn ends_with_prefix(fragment: &str) -> bool {
    SURNAME_PREFIXES.iter().any(|p| fragment.ends_with(p))
}

/// Split filtered text into candidate name tokens.
///
/// Phase one: walk the text; spaces, dots and any other non-name character
/// end the current fragment, and a lower-to-upper transition starts a new one
/// unless the fragment so far ends with a surname prefix (keeps "MacPherson"
/// whole). Phase two: a fragment that is exactly "Mc" or "Mac" is merged with
/// the fragment that follows it ("Mc" + "Naughton" -> "McNaughton").
///
/// The pipeline is pure: identical input always yields identical tokens, and
/// only the prefix merge looks ahead, by exactly one token.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();
    let mut cur = String::new();

    for ch in text.chars() {
        if ch.is_ascii_alphabetic() || ch == '\'' || ch == '-' {
            if ch.is_ascii_uppercase()
                && cur.chars().last().is_some_and(|p| p.is_ascii_lowercase())
                && !ends_with_prefix(&cur)
            {
                fragments.push(std::mem::take(&mut cur));
            }
            cur.push(ch);
        } else if !cur.is_empty() {
            fragments.push(std::mem::take(&mut cur));
        }
    }
    if !cur.is_empty() {
        fragments.push(cur);
    }

    merge_prefixes(fragments)
}

/// Re-join standalone prefix fragments with their immediate successor.
///
/// Runs strictly after splitting so the merged result can never be re-split.
fn merge_prefixes(fragments: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(fragments.len());
    let mut iter = fragments.into_iter();

    while let Some(fragment) = iter.next() {
        if SURNAME_PREFIXES.contains(&fragment.as_str()) {
            if let Some(next) = iter.next() {
                merged.push(format!("{fragment}{next}"));
                continue;
            }
        }
        merged.push(fragment);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_name_bytes() {
        assert_eq!(decode_name_bytes(b"O'Neil-Smith Jr."), "O'Neil-Smith Jr.");
    }

    #[test]
    fn test_decode_drops_noise_and_glues() {
        // Control bytes and high bytes are dropped, not replaced
        assert_eq!(decode_name_bytes(b"Ander\x00son\xff\x01Diamond"), "AndersonDiamond");
        assert_eq!(decode_name_bytes(b"\x00\x01\x02"), "");
    }

    #[test]
    fn test_tokenize_camel_case_split() {
        assert_eq!(
            tokenize("AndersonDiamondWright"),
            vec!["Anderson", "Diamond", "Wright"]
        );
    }

    #[test]
    fn test_tokenize_keeps_mc_surnames_whole() {
        assert_eq!(
            tokenize("McNaughtonDiamond"),
            vec!["McNaughton", "Diamond"]
        );
        assert_eq!(
            tokenize("DiamondMcNaughton"),
            vec!["Diamond", "McNaughton"]
        );
    }

    #[test]
    fn test_tokenize_keeps_mac_surnames_whole() {
        assert_eq!(
            tokenize("MacPhersonGrant"),
            vec!["MacPherson", "Grant"]
        );
    }

    #[test]
    fn test_tokenize_merges_spaced_prefix() {
        assert_eq!(tokenize("Mc Naughton"), vec!["McNaughton"]);
        assert_eq!(tokenize("Mac Pherson Smith"), vec!["MacPherson", "Smith"]);
    }

    #[test]
    fn test_tokenize_trailing_prefix_kept() {
        // Nothing to merge with; the lone prefix survives as-is
        assert_eq!(tokenize("Anderson Mc"), vec!["Anderson", "Mc"]);
    }

    #[test]
    fn test_tokenize_separators_and_whitespace_runs() {
        assert_eq!(
            tokenize("Esson  Anderson.Diamond"),
            vec!["Esson", "Anderson", "Diamond"]
        );
    }

    #[test]
    fn test_tokenize_apostrophe_and_hyphen() {
        assert_eq!(
            tokenize("O'NeilSmith-Jones"),
            vec!["O'Neil", "Smith-Jones"]
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ...").is_empty());
    }

    #[test]
    fn test_tokenize_deterministic() {
        let input = "EssonAndersonDiamondMcNaughton Mac Donald O'Boyle";
        assert_eq!(tokenize(input), tokenize(input));
    }
}
