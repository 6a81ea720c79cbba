use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{BranchVersionError, Result};
use crate::pom::{Model, Parent};

/// Read a descriptor from disk, keeping its text for later rewriting.
///
/// Both unreadable files and malformed content are reported as
/// [BranchVersionError::Persistence] for `path`.
pub fn read_model(path: &Path) -> Result<Model> {
    let text = fs::read_to_string(path).map_err(|e| BranchVersionError::persistence(path, e))?;

    parse_model(&text).map_err(|e| {
        BranchVersionError::persistence(
            path,
            io::Error::new(io::ErrorKind::InvalidData, e.to_string()),
        )
    })
}

/// Parse descriptor text
pub fn parse_model(text: &str) -> Result<Model> {
    let mut reader = Reader::from_str(text);
    let mut path: Vec<String> = Vec::new();
    let mut content = String::new();
    let mut model = Model::default();
    let mut parent: Option<Parent> = None;
    let mut seen_root = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            BranchVersionError::descriptor(format!(
                "Malformed XML at position {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(start) => {
                open(&mut path, element_name(start.local_name().as_ref())?, &mut seen_root)?;
                if is_parent_element(&path) {
                    parent = Some(Parent::default());
                }
                content.clear();
            }
            Event::Empty(empty) => {
                open(&mut path, element_name(empty.local_name().as_ref())?, &mut seen_root)?;
                if is_parent_element(&path) {
                    parent = Some(Parent::default());
                }
                assign(&path, "", &mut model, &mut parent);
                path.pop();
            }
            Event::Text(text) => content.push_str(&text.unescape().map_err(xml_error)?),
            Event::CData(data) => content.push_str(&String::from_utf8_lossy(&data)),
            Event::End(_) => {
                assign(&path, content.trim(), &mut model, &mut parent);
                path.pop();
                content.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(BranchVersionError::descriptor("Missing <project> root element"));
    }
    if let Some(unclosed) = path.last() {
        return Err(BranchVersionError::descriptor(format!(
            "Unclosed element <{}>",
            unclosed
        )));
    }

    model.parent = parent;
    Ok(model.with_source(text))
}

fn open(path: &mut Vec<String>, name: String, seen_root: &mut bool) -> Result<()> {
    if path.is_empty() {
        if *seen_root || name != "project" {
            return Err(BranchVersionError::descriptor(format!(
                "Unexpected root element <{}>, expected a single <project>",
                name
            )));
        }
        *seen_root = true;
    }
    path.push(name);
    Ok(())
}

fn is_parent_element(path: &[String]) -> bool {
    element_path(path).as_slice() == ["project", "parent"]
}

fn assign(path: &[String], value: &str, model: &mut Model, parent: &mut Option<Parent>) {
    let value = value.to_string();
    match element_path(path).as_slice() {
        ["project", "groupId"] => model.group_id = Some(value),
        ["project", "artifactId"] => model.artifact_id = Some(value),
        ["project", "version"] => model.version = Some(value),
        ["project", "packaging"] => model.packaging = Some(value),
        ["project", "parent", field] => {
            if let Some(parent) = parent.as_mut() {
                match *field {
                    "groupId" => parent.group_id = Some(value),
                    "artifactId" => parent.artifact_id = Some(value),
                    "version" => parent.version = Some(value),
                    "relativePath" => parent.relative_path = Some(value),
                    _ => {}
                }
            }
        }
        ["project", "modules", "module"] => model.modules.push(value),
        ["project", "profiles", "profile", "id"] => model.profiles.push(value),
        _ => {}
    }
}

pub(super) fn element_path(path: &[String]) -> Vec<&str> {
    path.iter().map(String::as_str).collect()
}

pub(super) fn element_name(name: &[u8]) -> Result<String> {
    std::str::from_utf8(name)
        .map(str::to_string)
        .map_err(|e| BranchVersionError::descriptor(format!("Invalid element name: {}", e)))
}

pub(super) fn xml_error<E: fmt::Display>(e: E) -> BranchVersionError {
    BranchVersionError::descriptor(format!("XML error: {}", e))
}
