use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::reader::{element_name, element_path, parse_model, xml_error};
use crate::error::{BranchVersionError, Result};
use crate::pom::Model;

/// Serialize a model to `out`
pub fn write_model<W: Write>(model: &Model, mut out: W) -> Result<()> {
    let text = render_model(model)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Serialize a model to text.
///
/// The model is written as the text it was parsed from with the project and
/// parent `<version>` elements replaced (or added after `<artifactId>` when
/// they were inherited). Comments, formatting and unmodeled elements are
/// kept byte for byte. A model without source text cannot be written.
pub fn render_model(model: &Model) -> Result<String> {
    let source = model
        .source()
        .ok_or_else(|| BranchVersionError::descriptor("Model has no source text to rewrite"))?;
    patch_source(source, model)
}

fn patch_source(source: &str, model: &Model) -> Result<String> {
    let declared = parse_model(source)?;
    let insert_version = declared.version.is_none() && model.version.is_some();
    let insert_parent_version = declared
        .parent
        .as_ref()
        .is_some_and(|p| p.version.is_none())
        && model.parent.as_ref().is_some_and(|p| p.version.is_some());

    let mut reader = Reader::from_str(source);
    let mut writer = Writer::new(Vec::new());
    let mut path: Vec<String> = Vec::new();
    let mut replacing = false;
    let mut last_whitespace = String::new();
    let mut artifact_indent = String::new();

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Eof => break,
            Event::Start(start) => {
                path.push(element_name(start.local_name().as_ref())?);
                if path.last().is_some_and(|name| name == "artifactId") {
                    artifact_indent = last_whitespace.clone();
                }
                let replacement = replacement_for(&path, model);
                write(&mut writer, Event::Start(start))?;
                if let Some(text) = &replacement {
                    write(&mut writer, Event::Text(BytesText::new(text)))?;
                }
                replacing = replacement.is_some();
            }
            Event::Empty(empty) => {
                path.push(element_name(empty.local_name().as_ref())?);
                match replacement_for(&path, model) {
                    Some(text) => {
                        let name = path.last().cloned().unwrap_or_default();
                        write(&mut writer, Event::Start(empty))?;
                        write(&mut writer, Event::Text(BytesText::new(&text)))?;
                        write(&mut writer, Event::End(BytesEnd::new(name)))?;
                    }
                    None => write(&mut writer, Event::Empty(empty))?,
                }
                path.pop();
            }
            Event::Text(text) => {
                if replacing {
                    continue;
                }
                if text.iter().all(u8::is_ascii_whitespace) {
                    last_whitespace = String::from_utf8_lossy(&text).into_owned();
                }
                write(&mut writer, Event::Text(text))?;
            }
            Event::CData(data) => {
                if !replacing {
                    write(&mut writer, Event::CData(data))?;
                }
            }
            Event::End(end) => {
                replacing = false;
                let closed = path.clone();
                path.pop();
                write(&mut writer, Event::End(end))?;

                let closed = element_path(&closed);
                if insert_version && closed.as_slice() == ["project", "artifactId"] {
                    if let Some(version) = &model.version {
                        write_inserted(&mut writer, &artifact_indent, version)?;
                    }
                }
                if insert_parent_version
                    && closed.as_slice() == ["project", "parent", "artifactId"]
                {
                    if let Some(version) = model.parent.as_ref().and_then(|p| p.version.as_ref()) {
                        write_inserted(&mut writer, &artifact_indent, version)?;
                    }
                }
            }
            other => write(&mut writer, other)?,
        }
    }

    into_string(writer)
}

fn replacement_for(path: &[String], model: &Model) -> Option<String> {
    match element_path(path).as_slice() {
        ["project", "version"] => model.version.clone(),
        ["project", "parent", "version"] => {
            model.parent.as_ref().and_then(|p| p.version.clone())
        }
        _ => None,
    }
}

fn write_inserted<W: Write>(writer: &mut Writer<W>, indent: &str, version: &str) -> Result<()> {
    if !indent.is_empty() {
        write(writer, Event::Text(BytesText::new(indent)))?;
    }
    text_element(writer, "version", version)
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(value)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(xml_error)
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner())
        .map_err(|e| BranchVersionError::descriptor(format!("Descriptor is not UTF-8: {}", e)))
}
