use crate::tree::{Data, Tag, Value};
use crate::util::indent_string;
use std::fmt;
use tracing::trace;

/// Knobs for the WML renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indent raw block payloads one level deeper than their brackets.
    /// Off by default: the payload is inserted exactly as given.
    pub reindent_raw_blocks: bool,
}

impl RenderOptions {
    pub fn reindent_raw_blocks(mut self, on: bool) -> Self {
        self.reindent_raw_blocks = on;
        self
    }
}

struct WmlWriter {
    options: RenderOptions,
}

/// Output of one container level: attribute lines come before sub-tags
/// regardless of key order.
#[derive(Default)]
struct Level {
    attributes: String,
    sub_tags: String,
}

impl WmlWriter {
    fn new(options: RenderOptions) -> Self {
        WmlWriter { options }
    }

    fn write_data(&self, data: &Data, depth: usize) -> String {
        let tabs = "\t".repeat(depth);
        let mut level = Level::default();

        for key in data.sorted_keys() {
            let Some(value) = data.get(key) else {
                continue;
            };
            let (domain, value) = unwrap_domain(value);
            self.write_entry(&mut level, &tabs, depth, key, domain, value);
        }

        level.attributes.push_str(&level.sub_tags);
        level.attributes
    }

    fn write_entry(
        &self,
        level: &mut Level,
        tabs: &str,
        depth: usize,
        key: &str,
        domain: Option<&str>,
        value: &Value,
    ) {
        match value {
            Value::Boolean(b) => {
                let v = if *b { "yes" } else { "no" };
                write_attribute(&mut level.attributes, tabs, domain, key, v);
            }
            Value::Integer(n) => {
                write_attribute(&mut level.attributes, tabs, domain, key, &n.to_string());
            }
            Value::Unsigned(n) => {
                write_attribute(&mut level.attributes, tabs, domain, key, &n.to_string());
            }
            Value::Float(n) => {
                write_attribute(&mut level.attributes, tabs, domain, key, &format_float(*n));
            }
            Value::Text(s) => {
                write_attribute(&mut level.attributes, tabs, domain, key, &format!("\"{}\"", s));
            }
            Value::Translatable(s) => {
                write_attribute(&mut level.attributes, tabs, domain, key, &format!("_\"{}\"", s));
            }
            Value::RawExpression(s) => {
                write_attribute(&mut level.attributes, tabs, domain, key, s);
            }
            Value::Map(_) | Value::RawBlock(_) => {
                write_directive(&mut level.sub_tags, tabs, domain);
                self.write_block(&mut level.sub_tags, tabs, depth, key, value);
            }
            Value::Repeated(items) => {
                for item in items {
                    let (item_domain, inner) = unwrap_domain(item);
                    match inner {
                        Value::Map(_) | Value::RawBlock(_) => {
                            write_directive(&mut level.sub_tags, tabs, domain);
                            write_directive(&mut level.sub_tags, tabs, item_domain);
                            self.write_block(&mut level.sub_tags, tabs, depth, key, inner);
                        }
                        other => {
                            trace!(key, kind = other.kind(), "dropping non-tag element of repeated value");
                        }
                    }
                }
            }
            // Only one level of domain is unwrapped.
            Value::DomainWrapped(_) => {
                trace!(key, "ignoring nested domain");
            }
        }
    }

    fn write_block(&self, out: &mut String, tabs: &str, depth: usize, key: &str, value: &Value) {
        match value {
            Value::Map(body) => self.write_tag(out, tabs, depth, key, body),
            Value::RawBlock(text) => self.write_raw(out, tabs, depth, key, text),
            _ => {}
        }
    }

    fn write_tag(&self, out: &mut String, tabs: &str, depth: usize, key: &str, body: &Data) {
        open_tag(out, tabs, key);
        out.push_str(&self.write_data(body, depth + 1));
        close_tag(out, tabs, key);
    }

    fn write_raw(&self, out: &mut String, tabs: &str, depth: usize, key: &str, text: &str) {
        open_tag(out, tabs, key);
        if self.options.reindent_raw_blocks {
            out.push_str(&indent_string(text, depth + 1));
        } else {
            out.push_str(text);
        }
        close_tag(out, tabs, key);
    }
}

fn open_tag(out: &mut String, tabs: &str, key: &str) {
    out.push_str(tabs);
    out.push('[');
    out.push_str(key);
    out.push_str("]\n");
}

fn close_tag(out: &mut String, tabs: &str, key: &str) {
    out.push_str(tabs);
    out.push_str("[/");
    out.push_str(key);
    out.push_str("]\n");
}

fn unwrap_domain(value: &Value) -> (Option<&str>, &Value) {
    match value {
        Value::DomainWrapped(d) => (Some(d.domain.as_str()), d.value.as_ref()),
        v => (None, v),
    }
}

/// Shortest round-trip form of a float. Plain decimal while the exponent
/// is in `[-4, 21)`, otherwise `1e+21` style with at least two exponent
/// digits. Infinities are `+Inf`/`-Inf`.
pub(crate) fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    let sci = format!("{:e}", n);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return n.to_string();
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..21).contains(&exp) {
        return n.to_string();
    }
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exp.abs())
}

fn write_directive(out: &mut String, tabs: &str, domain: Option<&str>) {
    if let Some(domain) = domain {
        out.push_str(tabs);
        out.push_str("#textdomain ");
        out.push_str(domain);
        out.push('\n');
    }
}

fn write_attribute(out: &mut String, tabs: &str, domain: Option<&str>, key: &str, value: &str) {
    write_directive(out, tabs, domain);
    out.push_str(tabs);
    out.push_str(key);
    out.push('=');
    out.push_str(value);
    out.push('\n');
}

/// Render a container at the given nesting depth with default options.
pub fn render(data: &Data, depth: usize) -> String {
    render_with(data, depth, RenderOptions::default())
}

pub fn render_with(data: &Data, depth: usize, options: RenderOptions) -> String {
    WmlWriter::new(options).write_data(data, depth)
}

impl Tag {
    /// Render as a `[name]...[/name]` block at the given depth.
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        WmlWriter::new(RenderOptions::default()).write_tag(
            &mut out,
            &"\t".repeat(depth),
            depth,
            &self.name,
            &self.body,
        );
        out
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, 0))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}
