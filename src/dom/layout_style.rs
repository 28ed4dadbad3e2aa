use super::*;

impl Dom {
    pub(crate) fn style_get(&self, node_id: NodeId, name: &str) -> Option<String> {
        let element = self.element(node_id)?;
        let name = name.to_ascii_lowercase();
        parse_style_declarations(element.attrs.get("style").map(String::as_str))
            .into_iter()
            .find(|(prop, _)| *prop == name)
            .map(|(_, value)| value)
    }

    pub(crate) fn style_set(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let name = name.to_ascii_lowercase();
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::NotAnElement("style".into()))?;

        let mut decls = parse_style_declarations(element.attrs.get("style").map(String::as_str));
        if let Some(pos) = decls.iter().position(|(prop, _)| *prop == name) {
            if value.is_empty() {
                decls.remove(pos);
            } else {
                decls[pos].1 = value.to_string();
            }
        } else if !value.is_empty() {
            decls.push((name, value.to_string()));
        }

        element
            .attrs
            .insert("style".to_string(), serialize_style_declarations(&decls));
        Ok(())
    }

    pub(crate) fn offset_width(&self, node_id: NodeId) -> Result<i64> {
        self.element(node_id)
            .map(|element| element.offset_width)
            .ok_or_else(|| Error::NotAnElement("offsetWidth".into()))
    }

    pub(crate) fn offset_height(&self, node_id: NodeId) -> Result<i64> {
        self.element(node_id)
            .map(|element| element.offset_height)
            .ok_or_else(|| Error::NotAnElement("offsetHeight".into()))
    }

    pub(crate) fn set_offset_size(&mut self, node_id: NodeId, width: i64, height: i64) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::NotAnElement("layout".into()))?;
        element.offset_width = width;
        element.offset_height = height;
        Ok(())
    }
}

pub(crate) fn parse_style_declarations(style_attr: Option<&str>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let Some(style_attr) = style_attr else {
        return out;
    };

    let mut start = 0usize;
    let mut i = 0usize;
    let bytes = style_attr.as_bytes();
    let mut paren_depth = 0usize;
    let mut quote: Option<u8> = None;

    while i < bytes.len() {
        let ch = bytes[i];
        match quote {
            Some(_) if ch == b'\\' => {
                i += 2;
                continue;
            }
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                b'\'' | b'"' => quote = Some(ch),
                b'(' => paren_depth += 1,
                b')' => paren_depth = paren_depth.saturating_sub(1),
                b';' if paren_depth == 0 => {
                    push_style_declaration(&style_attr[start..i], &mut out);
                    start = i + 1;
                }
                _ => {}
            },
        }
        i += 1;
    }

    if let Some(rest) = style_attr.get(start..) {
        push_style_declaration(rest, &mut out);
    }
    out
}

fn push_style_declaration(raw_decl: &str, out: &mut Vec<(String, String)>) {
    let decl = raw_decl.trim();
    let Some((name, value)) = decl.split_once(':') else {
        return;
    };

    let name = name.trim().to_ascii_lowercase();
    if name.is_empty() {
        return;
    }
    let value = value.trim().to_string();

    // Later declarations of the same property win.
    if let Some(pos) = out.iter().position(|(existing, _)| *existing == name) {
        out[pos].1 = value;
    } else {
        out.push((name, value));
    }
}

pub(crate) fn serialize_style_declarations(decls: &[(String, String)]) -> String {
    let mut out = String::new();
    for (idx, (name, value)) in decls.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push(';');
    }
    out
}
