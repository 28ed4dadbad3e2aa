use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SelectorAttrCondition {
    Exists { key: String },
    Eq { key: String, value: String },
    StartsWith { key: String, value: String },
    EndsWith { key: String, value: String },
    Contains { key: String, value: String },
    Includes { key: String, value: String },
    DashMatch { key: String, value: String },
}

impl SelectorAttrCondition {
    pub(crate) fn matches(&self, attrs: &HashMap<String, String>) -> bool {
        match self {
            Self::Exists { key } => attrs.contains_key(key),
            Self::Eq { key, value } => attrs.get(key) == Some(value),
            Self::StartsWith { key, value } => attrs
                .get(key)
                .is_some_and(|attr| !value.is_empty() && attr.starts_with(value.as_str())),
            Self::EndsWith { key, value } => attrs
                .get(key)
                .is_some_and(|attr| !value.is_empty() && attr.ends_with(value.as_str())),
            Self::Contains { key, value } => attrs
                .get(key)
                .is_some_and(|attr| !value.is_empty() && attr.contains(value.as_str())),
            Self::Includes { key, value } => attrs
                .get(key)
                .is_some_and(|attr| attr.split_whitespace().any(|token| token == value)),
            Self::DashMatch { key, value } => attrs
                .get(key)
                .is_some_and(|attr| attr == value || attr.starts_with(&format!("{value}-"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SelectorPseudoClass {
    FirstChild,
    LastChild,
    OnlyChild,
    FirstOfType,
    LastOfType,
    OnlyOfType,
    Empty,
    Not(Vec<Vec<SelectorPart>>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SelectorStep {
    pub(crate) tag: Option<String>,
    pub(crate) universal: bool,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<SelectorAttrCondition>,
    pub(crate) pseudo_classes: Vec<SelectorPseudoClass>,
}

impl SelectorStep {
    pub(crate) fn id_only(&self) -> Option<&str> {
        if !self.universal
            && self.tag.is_none()
            && self.classes.is_empty()
            && self.attrs.is_empty()
            && self.pseudo_classes.is_empty()
        {
            self.id.as_deref()
        } else {
            None
        }
    }

    fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attrs.is_empty()
            && !self.universal
            && self.pseudo_classes.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorCombinator {
    Descendant,
    Child,
    AdjacentSibling,
    GeneralSibling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorPart {
    pub(crate) step: SelectorStep,
    // Relation to previous (left) selector part.
    pub(crate) combinator: Option<SelectorCombinator>,
}

pub(crate) fn parse_selector_groups(selector: &str) -> Result<Vec<Vec<SelectorPart>>> {
    let groups = split_selector_groups(selector)?;
    let mut parsed = Vec::with_capacity(groups.len());
    for group in groups {
        parsed.push(parse_selector_chain(&group)?);
    }
    Ok(parsed)
}

pub(crate) fn parse_selector_chain(selector: &str) -> Result<Vec<SelectorPart>> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }

    let mut steps = Vec::new();
    let mut pending_combinator: Option<SelectorCombinator> = None;

    for token in tokenize_selector(selector)? {
        let combinator = match token.as_str() {
            ">" => Some(SelectorCombinator::Child),
            "+" => Some(SelectorCombinator::AdjacentSibling),
            "~" => Some(SelectorCombinator::GeneralSibling),
            _ => None,
        };
        if let Some(combinator) = combinator {
            if pending_combinator.is_some() || steps.is_empty() {
                return Err(Error::UnsupportedSelector(selector.into()));
            }
            pending_combinator = Some(combinator);
            continue;
        }

        let step = parse_selector_step(&token)?;
        let combinator = if steps.is_empty() {
            None
        } else {
            Some(
                pending_combinator
                    .take()
                    .unwrap_or(SelectorCombinator::Descendant),
            )
        };
        steps.push(SelectorPart { step, combinator });
    }

    if steps.is_empty() || pending_combinator.is_some() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    Ok(steps)
}

/// Splits on top-level commas, ignoring those inside `[...]`, `(...)` or quotes.
pub(crate) fn split_selector_groups(selector: &str) -> Result<Vec<String>> {
    let mut groups = Vec::new();
    let mut current = String::new();
    let mut depth = NestingDepth::default();

    for ch in selector.chars() {
        depth.track(ch).map_err(|_| Error::UnsupportedSelector(selector.into()))?;
        if ch == ',' && depth.is_top_level() {
            let trimmed = current.trim();
            if trimmed.is_empty() {
                return Err(Error::UnsupportedSelector(selector.into()));
            }
            groups.push(trimmed.to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }

    let trimmed = current.trim();
    if !depth.is_top_level() || trimmed.is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    groups.push(trimmed.to_string());
    Ok(groups)
}

pub(crate) fn tokenize_selector(selector: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = NestingDepth::default();

    for ch in selector.chars() {
        depth.track(ch).map_err(|_| Error::UnsupportedSelector(selector.into()))?;
        match ch {
            '>' | '+' | '~' if depth.is_top_level() => {
                if !current.trim().is_empty() {
                    tokens.push(current.trim().to_string());
                }
                current.clear();
                tokens.push(ch.to_string());
            }
            ch if ch.is_ascii_whitespace() && depth.is_top_level() => {
                if !current.trim().is_empty() {
                    tokens.push(current.trim().to_string());
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    if !depth.is_top_level() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    if !current.trim().is_empty() {
        tokens.push(current.trim().to_string());
    }
    Ok(tokens)
}

#[derive(Debug, Default)]
struct NestingDepth {
    bracket: usize,
    paren: usize,
    quote: Option<char>,
    escaped: bool,
}

impl NestingDepth {
    fn track(&mut self, ch: char) -> std::result::Result<(), ()> {
        // Brackets and parens inside a quoted attribute value are literal.
        if let Some(quote) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if ch == '\\' {
                self.escaped = true;
            } else if ch == quote {
                self.quote = None;
            }
            return Ok(());
        }
        match ch {
            '\'' | '"' => self.quote = Some(ch),
            '[' => self.bracket += 1,
            ']' => self.bracket = self.bracket.checked_sub(1).ok_or(())?,
            '(' => self.paren += 1,
            ')' => self.paren = self.paren.checked_sub(1).ok_or(())?,
            _ => {}
        }
        Ok(())
    }

    fn is_top_level(&self) -> bool {
        self.bracket == 0 && self.paren == 0 && self.quote.is_none()
    }
}

pub(crate) fn parse_selector_step(part: &str) -> Result<SelectorStep> {
    let part = part.trim();
    if part.is_empty() {
        return Err(Error::UnsupportedSelector(part.into()));
    }

    let bytes = part.as_bytes();
    let mut i = 0usize;
    let mut step = SelectorStep::default();

    while i < bytes.len() {
        match bytes[i] {
            b'*' => {
                if step.universal {
                    return Err(Error::UnsupportedSelector(part.into()));
                }
                step.universal = true;
                i += 1;
            }
            b'#' => {
                let Some((id, next)) = parse_selector_ident(part, i + 1) else {
                    return Err(Error::UnsupportedSelector(part.into()));
                };
                if step.id.replace(id).is_some() {
                    return Err(Error::UnsupportedSelector(part.into()));
                }
                i = next;
            }
            b'.' => {
                let Some((class_name, next)) = parse_selector_ident(part, i + 1) else {
                    return Err(Error::UnsupportedSelector(part.into()));
                };
                step.classes.push(class_name);
                i = next;
            }
            b'[' => {
                let (attr, next) = parse_selector_attr_condition(part, i)?;
                step.attrs.push(attr);
                i = next;
            }
            b':' => {
                let Some((pseudo, next)) = parse_selector_pseudo(part, i) else {
                    return Err(Error::UnsupportedSelector(part.into()));
                };
                step.pseudo_classes.push(pseudo);
                i = next;
            }
            _ => {
                if !step.is_empty() {
                    return Err(Error::UnsupportedSelector(part.into()));
                }
                let Some((tag, next)) = parse_selector_ident(part, i) else {
                    return Err(Error::UnsupportedSelector(part.into()));
                };
                step.tag = Some(tag.to_ascii_lowercase());
                i = next;
            }
        }
    }

    if step.is_empty() {
        return Err(Error::UnsupportedSelector(part.into()));
    }
    Ok(step)
}

pub(crate) fn parse_selector_pseudo(
    part: &str,
    start: usize,
) -> Option<(SelectorPseudoClass, usize)> {
    if part.as_bytes().get(start)? != &b':' {
        return None;
    }
    let start = start + 1;
    let tail = part.get(start..)?;

    if tail.starts_with("not(") {
        let (selectors, next) = parse_pseudo_selector_list(part, start, "not(")?;
        return Some((SelectorPseudoClass::Not(selectors), next));
    }

    let (name, next) = parse_selector_ident(part, start)?;
    if let Some(ch) = part.as_bytes().get(next) {
        if !is_selector_continuation(ch) {
            return None;
        }
    }
    let pseudo = match name.to_ascii_lowercase().as_str() {
        "first-child" => SelectorPseudoClass::FirstChild,
        "last-child" => SelectorPseudoClass::LastChild,
        "only-child" => SelectorPseudoClass::OnlyChild,
        "first-of-type" => SelectorPseudoClass::FirstOfType,
        "last-of-type" => SelectorPseudoClass::LastOfType,
        "only-of-type" => SelectorPseudoClass::OnlyOfType,
        "empty" => SelectorPseudoClass::Empty,
        _ => return None,
    };
    Some((pseudo, next))
}

pub(crate) fn parse_pseudo_selector_list(
    part: &str,
    start: usize,
    prefix: &str,
) -> Option<(Vec<Vec<SelectorPart>>, usize)> {
    let rest = part.get(start..)?.strip_prefix(prefix)?;
    let close_pos = find_matching_paren(rest)?;
    let body = rest[..close_pos].trim();
    if body.is_empty() {
        return None;
    }

    let mut selectors = Vec::new();
    for group in split_selector_groups(body).ok()? {
        selectors.push(parse_selector_chain(&group).ok()?);
    }

    let next = start + prefix.len() + close_pos + 1;
    if let Some(ch) = part.as_bytes().get(next) {
        if !is_selector_continuation(ch) {
            return None;
        }
    }
    Some((selectors, next))
}

pub(crate) fn find_matching_paren(body: &str) -> Option<usize> {
    let mut paren_depth = 1usize;
    let mut bracket_depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (idx, b) in body.bytes().enumerate() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            continue;
        }

        match b {
            b'\'' | b'"' => quote = Some(b),
            b'[' => bracket_depth += 1,
            b']' => bracket_depth = bracket_depth.checked_sub(1)?,
            b'(' if bracket_depth == 0 => paren_depth += 1,
            b')' if bracket_depth == 0 => {
                paren_depth = paren_depth.checked_sub(1)?;
                if paren_depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

pub(crate) fn is_selector_continuation(next: &u8) -> bool {
    matches!(next, b'.' | b'#' | b'[' | b':')
}

pub(crate) fn parse_selector_ident(src: &str, start: usize) -> Option<(String, usize)> {
    let bytes = src.as_bytes();
    if start >= bytes.len() || !is_selector_ident_char(bytes[start]) {
        return None;
    }
    let mut end = start + 1;
    while end < bytes.len() && is_selector_ident_char(bytes[end]) {
        end += 1;
    }
    Some((src.get(start..end)?.to_string(), end))
}

pub(crate) fn is_selector_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

pub(crate) fn parse_selector_attr_condition(
    src: &str,
    open_bracket: usize,
) -> Result<(SelectorAttrCondition, usize)> {
    let bytes = src.as_bytes();
    let unsupported = || Error::UnsupportedSelector(src.into());
    let mut i = open_bracket + 1;

    skip_selector_ws(bytes, &mut i);
    let key_start = i;
    while i < bytes.len() && is_selector_attr_name_char(bytes[i]) {
        i += 1;
    }
    if key_start == i {
        return Err(unsupported());
    }
    let key = src
        .get(key_start..i)
        .ok_or_else(unsupported)?
        .to_ascii_lowercase();

    skip_selector_ws(bytes, &mut i);
    match bytes.get(i) {
        None => return Err(unsupported()),
        Some(b']') => return Ok((SelectorAttrCondition::Exists { key }, i + 1)),
        Some(_) => {}
    }

    let (op, next) = match (bytes[i], bytes.get(i + 1)) {
        (b'=', _) => (b'=', i + 1),
        (b'^' | b'$' | b'*' | b'~' | b'|', Some(b'=')) => (bytes[i], i + 2),
        _ => return Err(unsupported()),
    };

    i = next;
    skip_selector_ws(bytes, &mut i);
    let (value, after_value) = parse_selector_attr_value(src, i)?;
    i = after_value;
    skip_selector_ws(bytes, &mut i);
    if bytes.get(i) != Some(&b']') {
        return Err(unsupported());
    }

    let cond = match op {
        b'^' => SelectorAttrCondition::StartsWith { key, value },
        b'$' => SelectorAttrCondition::EndsWith { key, value },
        b'*' => SelectorAttrCondition::Contains { key, value },
        b'~' => SelectorAttrCondition::Includes { key, value },
        b'|' => SelectorAttrCondition::DashMatch { key, value },
        _ => SelectorAttrCondition::Eq { key, value },
    };
    Ok((cond, i + 1))
}

fn skip_selector_ws(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && bytes[*i].is_ascii_whitespace() {
        *i += 1;
    }
}

pub(crate) fn is_selector_attr_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b':'
}

pub(crate) fn parse_selector_attr_value(src: &str, start: usize) -> Result<(String, usize)> {
    let bytes = src.as_bytes();
    if start >= bytes.len() {
        return Err(Error::UnsupportedSelector(src.into()));
    }

    if bytes[start] == b'"' || bytes[start] == b'\'' {
        let quote = bytes[start];
        let mut i = start + 1;
        while i < bytes.len() {
            if bytes[i] == b'\\' {
                i = (i + 2).min(bytes.len());
                continue;
            }
            if bytes[i] == quote {
                let raw = src
                    .get(start + 1..i)
                    .ok_or_else(|| Error::UnsupportedSelector(src.into()))?;
                return Ok((unescape_selector_value(raw), i + 1));
            }
            i += 1;
        }
        return Err(Error::UnsupportedSelector(src.into()));
    }

    let mut i = start;
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b']' {
        if bytes[i] == b'\\' {
            i = (i + 2).min(bytes.len());
            continue;
        }
        i += 1;
    }
    let raw = src
        .get(start..i)
        .ok_or_else(|| Error::UnsupportedSelector(src.into()))?;
    Ok((unescape_selector_value(raw), i))
}

fn unescape_selector_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(ch);
        }
    }
    out
}
