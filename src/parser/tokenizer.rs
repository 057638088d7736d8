use std::iter::Enumerate;

/// One non-blank line of input, split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLine<'a> {
    /// 1-based line number in the input text.
    pub number: usize,
    pub keyword: &'a str,
    /// Tokens after the keyword.
    pub args: Vec<&'a str>,
}

/// Lazy iterator over the non-blank lines of a text, see [`tokenize`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    inner: Enumerate<std::str::Lines<'a>>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = TokenLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, line) in self.inner.by_ref() {
            let mut tokens = line.split_whitespace();
            let Some(keyword) = tokens.next() else {
                continue;
            };

            return Some(TokenLine {
                number: idx + 1,
                keyword,
                args: tokens.collect(),
            });
        }

        None
    }
}

/// Splits `content` into whitespace separated tokens line by line. Blank lines
/// are skipped but still counted, so line numbers match the input.
pub fn tokenize(content: &str) -> Lines<'_> {
    Lines {
        inner: content.lines().enumerate(),
    }
}
