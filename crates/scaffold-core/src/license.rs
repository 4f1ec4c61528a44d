//! License registry interface
//!
//! The full registry (~400 SPDX entries) lives outside this crate; the
//! engine only needs the lookup seam plus a small built-in table covering
//! the identifiers the prompt flow offers by default.

/// Resolved license metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseInfo {
    pub name: String,
    pub url: String,
    /// Full license text; may carry `<year>` / `<copyright holders>`
    /// placeholders the renderer substitutes
    pub text: String,
}

/// Maps a license identifier to its metadata
pub trait LicenseRegistry {
    fn lookup(&self, id: &str) -> Option<LicenseInfo>;
}

/// Collapse runs of three or more consecutive blank lines to exactly one
/// blank line. One or two blank lines pass through unchanged.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut blank_run = 0usize;

    for line in text.lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            continue;
        }
        if blank_run >= 3 {
            out.push("");
        } else {
            for _ in 0..blank_run {
                out.push("");
            }
        }
        blank_run = 0;
        out.push(line);
    }
    if blank_run >= 3 {
        out.push("");
    } else {
        for _ in 0..blank_run {
            out.push("");
        }
    }

    let mut collapsed = out.join("\n");
    if text.ends_with('\n') && !collapsed.is_empty() {
        collapsed.push('\n');
    }
    collapsed
}

/// Built-in registry with the short-text SPDX licenses the prompts offer.
/// Identifiers outside this table resolve to `None` and fall back to the
/// external registry.
pub struct SpdxRegistry;

const MIT_TEXT: &str = "\
Copyright (c) <year> <copyright holders>

Permission is hereby granted, free of charge, to any person obtaining a copy \
of this software and associated documentation files (the \"Software\"), to deal \
in the Software without restriction, including without limitation the rights \
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell \
copies of the Software, and to permit persons to whom the Software is \
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in \
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR \
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, \
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE \
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER \
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, \
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN \
THE SOFTWARE.
";

const ISC_TEXT: &str = "\
Copyright (c) <year> <copyright holders>

Permission to use, copy, modify, and/or distribute this software for any \
purpose with or without fee is hereby granted, provided that the above \
copyright notice and this permission notice appear in all copies.

THE SOFTWARE IS PROVIDED \"AS IS\" AND THE AUTHOR DISCLAIMS ALL WARRANTIES \
WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF \
MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY \
SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES \
WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION \
OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN \
CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
";

const BSD_2_CLAUSE_TEXT: &str = "\
Copyright (c) <year> <copyright holders>

Redistribution and use in source and binary forms, with or without \
modification, are permitted provided that the following conditions are met:

1. Redistributions of source code must retain the above copyright notice, \
this list of conditions and the following disclaimer.

2. Redistributions in binary form must reproduce the above copyright notice, \
this list of conditions and the following disclaimer in the documentation \
and/or other materials provided with the distribution.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS \"AS IS\" \
AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE \
IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE \
ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE \
LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR \
CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF \
SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS \
INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN \
CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) \
ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE \
POSSIBILITY OF SUCH DAMAGE.
";

const UNLICENSE_TEXT: &str = "\
This is free and unencumbered software released into the public domain.

Anyone is free to copy, modify, publish, use, compile, sell, or distribute \
this software, either in source code form or as a compiled binary, for any \
purpose, commercial or non-commercial, and by any means.

In jurisdictions that recognize copyright laws, the author or authors of \
this software dedicate any and all copyright interest in the software to the \
public domain.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR \
IMPLIED. For more information, please refer to <https://unlicense.org>
";

const BUILTIN_LICENSES: &[(&str, &str, &str)] = &[
    ("MIT", "MIT License", MIT_TEXT),
    ("ISC", "ISC License", ISC_TEXT),
    ("BSD-2-Clause", "BSD 2-Clause \"Simplified\" License", BSD_2_CLAUSE_TEXT),
    ("Unlicense", "The Unlicense", UNLICENSE_TEXT),
];

impl SpdxRegistry {
    /// Identifiers this registry can resolve, in prompt order
    pub fn identifiers() -> Vec<&'static str> {
        BUILTIN_LICENSES.iter().map(|(id, _, _)| *id).collect()
    }
}

impl LicenseRegistry for SpdxRegistry {
    fn lookup(&self, id: &str) -> Option<LicenseInfo> {
        BUILTIN_LICENSES
            .iter()
            .find(|(candidate, _, _)| candidate.eq_ignore_ascii_case(id))
            .map(|(id, name, text)| LicenseInfo {
                name: (*name).to_string(),
                url: format!("https://spdx.org/licenses/{id}.html"),
                text: collapse_blank_lines(text),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_license() {
        let info = SpdxRegistry.lookup("MIT").unwrap();
        assert_eq!(info.name, "MIT License");
        assert_eq!(info.url, "https://spdx.org/licenses/MIT.html");
        assert!(info.text.contains("Permission is hereby granted"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(SpdxRegistry.lookup("mit").is_some());
    }

    #[test]
    fn test_lookup_unknown_license() {
        assert!(SpdxRegistry.lookup("WTFPL").is_none());
    }

    #[test]
    fn test_collapse_squeezes_three_or_more_blank_lines() {
        let text = "a\n\n\n\nb\n";
        assert_eq!(collapse_blank_lines(text), "a\n\nb\n");
    }

    #[test]
    fn test_collapse_keeps_one_or_two_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\n\nb"), "a\n\n\nb");
    }

    #[test]
    fn test_collapse_handles_trailing_blanks() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n"), "a\n\n");
    }
}
