use super::*;

/// Ordered set of class tokens.
///
/// Parsing splits on ASCII whitespace and keeps the first occurrence of each
/// token, so every mutation is idempotent and serialization is canonical:
/// tokens joined by a single space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn parse(class_attr: Option<&str>) -> Self {
        let mut list = Self::default();
        for token in class_attr.unwrap_or_default().split_ascii_whitespace() {
            list.add(token);
        }
        list
    }

    /// A valid token is non-empty and holds no ASCII whitespace.
    pub fn is_valid_token(token: &str) -> bool {
        !token.is_empty() && !token.bytes().any(|b| b.is_ascii_whitespace())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|existing| existing == token)
    }

    /// Returns `false` when the token was already present or is invalid.
    pub fn add(&mut self, token: &str) -> bool {
        if !Self::is_valid_token(token) || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Returns `false` when the token was absent.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|existing| existing != token);
        self.tokens.len() != before
    }

    /// Returns whether the token is present afterwards.
    pub fn toggle(&mut self, token: &str) -> bool {
        if self.remove(token) {
            false
        } else {
            self.add(token)
        }
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
