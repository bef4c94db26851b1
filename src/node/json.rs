use super::BencodeNode;

/// Spaces added per nesting level by `Style::Pretty`.
const INDENT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Compact,
    /// Multi-line output; the value is the current nesting level.
    Pretty(usize),
}

impl Style {
    fn nested(self) -> Self {
        match self {
            Style::Compact => Style::Compact,
            Style::Pretty(level) => Style::Pretty(level + 1),
        }
    }
}

impl BencodeNode {
    pub fn to_json_with_style(&self, style: Style) -> String {
        match self {
            BencodeNode::Int(val) => val.to_string(),
            BencodeNode::Str(val) => format!(r#""{}""#, escape_string(val)),
            BencodeNode::List(items) => {
                let items = items
                    .iter()
                    .map(|item| item.to_json_with_style(style.nested()))
                    .collect::<Vec<_>>();

                wrap_items("[", items, "]", style)
            }
            BencodeNode::Dict(map) => {
                let mut entries = map.iter().collect::<Vec<_>>();
                entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

                let items = entries
                    .into_iter()
                    .map(|(key, val)| {
                        format!(
                            r#""{}": {}"#,
                            escape_string(key),
                            val.to_json_with_style(style.nested())
                        )
                    })
                    .collect::<Vec<_>>();

                wrap_items("{", items, "}", style)
            }
        }
    }

    pub fn to_json(&self) -> String {
        self.to_json_with_style(Style::Compact)
    }

    pub fn to_json_pretty(&self) -> String {
        self.to_json_with_style(Style::Pretty(0))
    }
}

fn wrap_items(open: &str, items: Vec<String>, close: &str, style: Style) -> String {
    if items.is_empty() {
        return format!("{open}{close}");
    }

    match style {
        Style::Compact => format!("{open}{}{close}", items.join(", ")),
        Style::Pretty(level) => {
            let inner = gen_blanks((level + 1) * INDENT);
            let outer = gen_blanks(level * INDENT);
            let body = items
                .iter()
                .map(|item| format!("{inner}{item}"))
                .collect::<Vec<_>>()
                .join(",\n");

            format!("{open}\n{body}\n{outer}{close}")
        }
    }
}

fn gen_blanks(span: usize) -> String {
    " ".repeat(span)
}

pub fn escape_char(byte: u8) -> String {
    match byte {
        b' ' => " ".into(),
        b'"' | b'\\' => format!("\\x{:02x}", byte),
        _ if byte.is_ascii_graphic() => format!("{}", byte as char),
        _ => format!("\\x{:02x}", byte),
    }
}

pub fn escape_string(bytes: &[u8]) -> String {
    let mut result = String::new();
    for c in bytes.iter() {
        result.push_str(&escape_char(*c));
    }

    result
}
