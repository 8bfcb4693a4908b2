use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Turn a container title into a catalog-safe name.
///
/// Letters are decomposed (NFKD) and stripped of their accents, the few Latin
/// letters that have no decomposition are spelled out, and every other run of
/// characters becomes a single `-`. Leading and trailing separators are dropped.
pub fn slugify(value: &str) -> String {
    let mut out = String::new();
    let mut pending_dash = false;

    for ch in value.nfkd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase) {
        let mut buf = [0u8; 4];
        let piece = if ch.is_ascii_alphanumeric() {
            Some(&*ch.encode_utf8(&mut buf))
        } else {
            spell_out(ch)
        };

        match piece {
            Some(piece) => {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push_str(piece);
            }
            None => pending_dash = true,
        }
    }

    out
}

/// Latin letters that NFKD leaves untouched
fn spell_out(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'æ' => "ae",
        'œ' => "oe",
        'ø' => "o",
        'ł' | 'ƚ' => "l",
        'đ' | 'ð' | 'ɖ' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ŧ' => "t",
        'ŋ' => "ng",
        'þ' => "th",
        'ß' => "ss",
        'ĸ' => "q",
        'ƀ' => "b",
        'ƶ' => "z",
        _ => return None,
    };
    Some(folded)
}
