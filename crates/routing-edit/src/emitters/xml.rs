//! XML emitter: appends an `<import>` child to the document root

use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::entry::ImportEntry;
use crate::error::{Error, Result};
use crate::format::{ImportEmitter, RoutingFormat};

/// Indentation used when pretty-printing routing documents
pub const DEFAULT_INDENT: usize = 2;

/// Emitter for XML routing files.
///
/// The document is read event by event and written back pretty-printed.
/// Whitespace-only text is dropped and every tag is re-emitted with its
/// attributes on one line, so the output layout does not depend on how the
/// input was formatted. Content that is not a single well-formed element
/// tree is rejected with [`Error::MalformedMarkup`], including empty input.
/// Documents without an XML declaration get `<?xml version="1.0"?>`.
#[derive(Debug, Clone)]
pub struct XmlEmitter {
    indent: usize,
}

impl XmlEmitter {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for XmlEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl ImportEmitter for XmlEmitter {
    fn format(&self) -> RoutingFormat {
        RoutingFormat::Xml
    }

    fn emit(&self, current: &str, entry: &ImportEntry) -> Result<String> {
        let mut reader = Reader::from_str(current);
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', self.indent);
        let import = import_element(entry);

        let mut depth = 0usize;
        let mut root_done = false;
        let mut prolog_started = false;
        let mut last_inline = false;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| Error::markup(e.to_string()))?;

            if matches!(&event, Event::Text(text) if text.iter().all(u8::is_ascii_whitespace)) {
                continue;
            }

            if !prolog_started {
                match &event {
                    Event::Eof => {}
                    Event::Decl(_) => prolog_started = true,
                    _ => {
                        let decl = BytesDecl::new("1.0", None, None);
                        write(&mut writer, Event::Decl(decl))?;
                        prolog_started = true;
                    }
                }
            }
            let inline = matches!(event, Event::Text(_) | Event::CData(_));
            let after_inline = std::mem::replace(&mut last_inline, inline);

            match event {
                Event::Start(start) => {
                    if depth == 0 && root_done {
                        return Err(Error::markup("multiple root elements"));
                    }
                    depth += 1;
                    write(&mut writer, Event::Start(normalize_tag(&start)?))?;
                }
                Event::End(end) => {
                    if depth == 0 {
                        return Err(Error::markup("closing tag without matching opening tag"));
                    }
                    depth -= 1;
                    if depth == 0 {
                        if after_inline {
                            // The writer keeps text and CDATA on their line
                            let inner = writer.get_mut();
                            inner.push(b'\n');
                            inner.extend(std::iter::repeat_n(b' ', self.indent));
                        }
                        write(&mut writer, Event::Empty(import.clone()))?;
                        root_done = true;
                    }
                    write(&mut writer, Event::End(end))?;
                }
                Event::Empty(start) => {
                    let tag = normalize_tag(&start)?;
                    if depth > 0 {
                        write(&mut writer, Event::Empty(tag))?;
                        continue;
                    }
                    if root_done {
                        return Err(Error::markup("multiple root elements"));
                    }
                    // A self-closing root has to be opened to take a child
                    let end = tag.to_end().into_owned();
                    write(&mut writer, Event::Start(tag))?;
                    write(&mut writer, Event::Empty(import.clone()))?;
                    write(&mut writer, Event::End(end))?;
                    root_done = true;
                }
                Event::Text(text) => {
                    if depth == 0 {
                        return Err(Error::markup("text outside the root element"));
                    }
                    write(&mut writer, Event::Text(text))?;
                }
                Event::Eof => break,
                other => write(&mut writer, other)?,
            }
        }

        if depth > 0 {
            return Err(Error::markup("unexpected end of document: unclosed element"));
        }
        if !root_done {
            return Err(Error::markup("document has no root element"));
        }

        let mut code =
            String::from_utf8(writer.into_inner()).map_err(|e| Error::markup(e.to_string()))?;
        code.push('\n');
        Ok(code)
    }
}

fn import_element(entry: &ImportEntry) -> BytesStart<'static> {
    let resource = entry.resource_path("xml");
    let mut import = BytesStart::new("import");
    import.push_attribute(("resource", resource.as_str()));
    import.push_attribute(("prefix", entry.prefix()));
    import
}

/// Rebuild a tag so its attributes are single-space separated.
fn normalize_tag(start: &BytesStart<'_>) -> Result<BytesStart<'static>> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| Error::markup(e.to_string()))?
        .to_owned();
    let mut tag = BytesStart::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::markup(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|e| Error::markup(e.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| Error::markup(e.to_string()))?;
        tag.push_attribute((key, value.as_ref()));
    }
    Ok(tag)
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::markup(e.to_string()))
}
