use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document as LopdfDocument, Object};

/// A `Tj` string with the text position and font in effect when it was shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ShownText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: String,
    pub size: f32,
}

pub fn number(object: &Object) -> f32 {
    match object {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r as f32,
        other => panic!("expected a number, got {:?}", other),
    }
}

/// Decoded content operations of the first page.
pub fn first_page_operations(doc: &LopdfDocument) -> Vec<Operation> {
    let page_id = *doc.get_pages().values().next().expect("document has no pages");
    let content = doc.get_page_content(page_id).expect("page content");
    Content::decode(&content).expect("decodable content").operations
}

/// Walks the first page's text operators. String bytes are WinAnsi, which
/// agrees with Latin-1 for every character the quote page prints.
pub fn shown_text(doc: &LopdfDocument) -> Vec<ShownText> {
    let mut shown = Vec::new();
    let (mut x, mut y) = (0.0, 0.0);
    let mut font = String::new();
    let mut size = 0.0;

    for op in first_page_operations(doc) {
        match op.operator.as_str() {
            "Tf" => {
                font = String::from_utf8_lossy(op.operands[0].as_name().unwrap()).to_string();
                size = number(&op.operands[1]);
            }
            "Td" => {
                x = number(&op.operands[0]);
                y = number(&op.operands[1]);
            }
            "Tj" => {
                let text = op.operands[0]
                    .as_str()
                    .unwrap()
                    .iter()
                    .map(|&b| b as char)
                    .collect();
                shown.push(ShownText {
                    text,
                    x,
                    y,
                    font: font.clone(),
                    size,
                });
            }
            _ => {}
        }
    }
    shown
}

pub fn first_page_dict(doc: &LopdfDocument) -> &Dictionary {
    let page_id = *doc.get_pages().values().next().expect("document has no pages");
    doc.get_dictionary(page_id).expect("page dictionary")
}

pub fn media_box(doc: &LopdfDocument) -> Vec<f32> {
    first_page_dict(doc)
        .get(b"MediaBox")
        .and_then(Object::as_array)
        .expect("MediaBox")
        .iter()
        .map(number)
        .collect()
}

fn resources(doc: &LopdfDocument) -> &Dictionary {
    let resources = first_page_dict(doc).get(b"Resources").expect("Resources");
    match resources.as_reference() {
        Ok(id) => doc.get_dictionary(id).expect("resources dictionary"),
        Err(_) => resources.as_dict().expect("resources dictionary"),
    }
}

/// BaseFont names of the fonts the first page references.
pub fn font_names(doc: &LopdfDocument) -> Vec<String> {
    let Ok(fonts) = resources(doc).get(b"Font").and_then(Object::as_dict) else {
        return vec![];
    };
    let mut names: Vec<String> = fonts
        .iter()
        .filter_map(|(_, font)| font.as_dict().ok())
        .filter_map(|font| font.get(b"BaseFont").and_then(Object::as_name).ok())
        .map(|name| String::from_utf8_lossy(name).to_string())
        .collect();
    names.sort();
    names
}

pub fn image_xobject_count(doc: &LopdfDocument) -> usize {
    resources(doc)
        .get(b"XObject")
        .and_then(Object::as_dict)
        .map(|xobjects| xobjects.len())
        .unwrap_or(0)
}

pub fn has_operator(doc: &LopdfDocument, operator: &str) -> bool {
    first_page_operations(doc)
        .iter()
        .any(|op| op.operator == operator)
}
