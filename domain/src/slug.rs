use deunicode::deunicode;

/// URL slug from a display name: transliterated to ASCII, lowercased,
/// non-alphanumeric runs collapsed to a single hyphen, no edge hyphens.
///
/// Icelandic titles are the common case here; `deunicode` maps
/// `ð` to `d` and `þ` to `th` before the ASCII pass.
///
/// Empty input yields an empty slug; callers must reject that as a
/// missing required field rather than persist it.
#[must_use]
pub fn slugify(input: &str) -> String {
    let transliterated = deunicode(input.trim()).to_lowercase();

    let mut slug = String::with_capacity(transliterated.len());
    let mut pending_separator = false;
    for ch in transliterated.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Storage-safe object key segment from an uploaded file's name.
///
/// Word characters and the extension dot survive; everything else
/// becomes a hyphen, runs collapsed, lowercased. Callers prefix the
/// result with a slug or timestamp to build the full storage key.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let transliterated = deunicode(name);

    let mut sanitized = String::with_capacity(transliterated.len());
    let mut pending_separator = false;
    for ch in transliterated.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '.' {
            if pending_separator && !sanitized.is_empty() {
                sanitized.push('-');
            }
            pending_separator = false;
            sanitized.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid_slug(slug: &str) -> bool {
        // ^[a-z0-9]+(-[a-z0-9]+)*$
        !slug.is_empty()
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    #[test]
    fn output_shape() {
        for input in [
            "Hello, World!",
            "  spaced   out  ",
            "UPPER_case-mix 42",
            "---",
            "déjà vu",
            "漢字タイトル",
        ] {
            let slug = slugify(input);
            assert!(
                slug.is_empty() || is_valid_slug(&slug),
                "bad slug {slug:?} from {input:?}"
            );
        }
    }

    #[test]
    fn icelandic_transliteration() {
        let slug = slugify("Þórshöfn á Ísafirði");
        assert!(slug.is_ascii());
        assert!(slug.starts_with("th"), "got {slug:?}");
        assert_eq!(slug, "thorshofn-a-isafirdi");
        assert_eq!(slugify("Eldgos og jökulhlaup"), "eldgos-og-jokulhlaup");
    }

    #[test]
    fn idempotent() {
        for input in ["Þoka í dölum", "A  B  C", "already-a-slug", ""] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn filenames_keep_extension_dot() {
        assert_eq!(sanitize_filename("My Photo (1).JPG"), "my-photo-1.jpg");
        assert_eq!(sanitize_filename("mynd_af_verki.png"), "mynd_af_verki.png");
        assert_eq!(sanitize_filename("Ísafjörður löngumynd.jpeg"), "isafjordur-longumynd.jpeg");
    }
}
