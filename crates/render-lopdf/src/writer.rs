use crate::logo::ImageXObject;
use cotizador_render_core::RenderError;
use cotizador_types::Size;
use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Writes a PDF file to `W`.
///
/// The header is written when the writer is created, so an unusable output
/// fails before any layout work. Objects are buffered and written in id
/// order by [`finish`](Self::finish), followed by the cross-reference table
/// and trailer. Output is byte-for-byte deterministic for identical input.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    start_offset: u64,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    fonts: Dictionary,
    xobjects: Dictionary,
    info: Option<Dictionary>,
    page_ids: Vec<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str) -> Result<Self, RenderError> {
        let start_offset = writer.stream_position()?;
        writer.write_all(format!("%PDF-{}\n", version).as_bytes())?;
        // Binary marker so transfer tools treat the file as binary.
        writer.write_all(b"%\xE2\xE3\xCF\xD3\n")?;

        Ok(Self {
            writer,
            start_offset,
            max_id: 3,
            resources_id: (1, 0),
            pages_id: (2, 0),
            catalog_id: (3, 0),
            fonts: Dictionary::new(),
            xobjects: Dictionary::new(),
            info: None,
            page_ids: Vec::new(),
            buffered_objects: BTreeMap::new(),
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    /// Registers a non-embedded Type1 font under `resource_name`.
    pub fn add_standard_font(&mut self, resource_name: &str, base_font: &str) {
        let font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
            "Encoding" => "WinAnsiEncoding",
        };
        self.fonts.set(resource_name, Object::Dictionary(font));
    }

    /// Buffers an image (and its soft mask) and exposes it to pages as
    /// `/resource_name`.
    pub fn add_image(&mut self, resource_name: &str, image: ImageXObject) -> Result<ObjectId, RenderError> {
        let ImageXObject {
            mut image,
            soft_mask,
        } = image;
        if let Some(mask) = soft_mask {
            let mask_id = self.buffer_object(Object::Stream(deflated(mask)?));
            image.dict.set("SMask", mask_id);
        }
        let image_id = self.buffer_object(Object::Stream(deflated(image)?));
        self.xobjects.set(resource_name, image_id);
        Ok(image_id)
    }

    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = deflated(Stream::new(dictionary! {}, content.encode()?))?;
        Ok(self.buffer_object(Object::Stream(stream)))
    }

    pub fn add_page(&mut self, content_ids: Vec<ObjectId>, size: Size) -> ObjectId {
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![Object::Integer(0), Object::Integer(0), size.width.into(), size.height.into()],
            "Contents" => content_ids.into_iter().map(Object::Reference).collect::<Vec<_>>(),
            "Resources" => self.resources_id,
        };
        let page_id = self.buffer_object(page.into());
        self.page_ids.push(page_id);
        page_id
    }

    pub fn set_info(&mut self, info: Dictionary) {
        self.info = Some(info);
    }

    /// Writes every buffered object, the xref table and the trailer, and
    /// returns the underlying writer.
    pub fn finish(mut self) -> Result<W, RenderError> {
        if self.page_ids.is_empty() {
            return Err(RenderError::Other("Cannot finish a PDF without pages".into()));
        }

        let mut resources = dictionary! { "Font" => Object::Dictionary(self.fonts) };
        if !self.xobjects.is_empty() {
            resources.set("XObject", Object::Dictionary(self.xobjects));
        }
        self.buffered_objects.insert(self.resources_id, resources.into());

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffered_objects.insert(self.pages_id, pages.into());

        let catalog = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffered_objects.insert(self.catalog_id, catalog.into());

        let info_id = match self.info {
            Some(info) => {
                self.max_id += 1;
                let id = (self.max_id, 0);
                self.buffered_objects.insert(id, info.into());
                Some(id)
            }
            None => None,
        };

        let mut offsets: BTreeMap<u32, u64> = BTreeMap::new();
        for (id, object) in &self.buffered_objects {
            let offset = self.writer.stream_position()? - self.start_offset;
            offsets.insert(id.0, offset);
            writeln!(self.writer, "{} {} obj", id.0, id.1)?;
            syntax::write_object(&mut self.writer, object)?;
            self.writer.write_all(b"\nendobj\n")?;
        }

        let xref_offset = self.writer.stream_position()? - self.start_offset;
        let size = self.max_id + 1;
        write!(self.writer, "xref\n0 {}\n", size)?;
        self.writer.write_all(b"0000000000 65535 f \n")?;
        for id in 1..size {
            match offsets.get(&id) {
                Some(offset) => writeln!(self.writer, "{:010} 00000 n ", offset)?,
                None => self.writer.write_all(b"0000000000 00000 f \n")?,
            }
        }

        let mut trailer = dictionary! { "Size" => i64::from(size), "Root" => self.catalog_id };
        if let Some(id) = info_id {
            trailer.set("Info", id);
        }
        self.writer.write_all(b"trailer\n")?;
        syntax::write_dictionary(&mut self.writer, &trailer)?;
        write!(self.writer, "\nstartxref\n{}\n%%EOF\n", xref_offset)?;
        self.writer.flush()?;

        log::debug!(
            "Wrote PDF with {} objects and {} page(s)",
            offsets.len(),
            self.page_ids.len()
        );
        Ok(self.writer)
    }
}

/// FlateDecode-compresses `stream` unless it already carries a filter
/// (DCT-encoded JPEG data is kept as is).
fn deflated(mut stream: Stream) -> Result<Stream, RenderError> {
    if !stream.dict.has(b"Filter") {
        stream.compress()?;
    }
    Ok(stream)
}

/// Serialization of lopdf objects in PDF file syntax.
mod syntax {
    use super::*;

    pub fn write_object(out: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => out.write_all(b"null"),
            Object::Boolean(b) => out.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(out, "{}", i),
            Object::Real(r) => out.write_all(format_real(f64::from(*r)).as_bytes()),
            Object::Name(name) => write_name(out, name),
            Object::String(bytes, StringFormat::Literal) => write_literal_string(out, bytes),
            Object::String(bytes, StringFormat::Hexadecimal) => {
                out.write_all(b"<")?;
                for byte in bytes {
                    write!(out, "{:02X}", byte)?;
                }
                out.write_all(b">")
            }
            Object::Array(items) => {
                out.write_all(b"[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.write_all(b" ")?;
                    }
                    write_object(out, item)?;
                }
                out.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(out, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(out, &dict)?;
                out.write_all(b"\nstream\n")?;
                out.write_all(&stream.content)?;
                out.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(out, "{} {} R", id.0, id.1),
        }
    }

    pub fn write_dictionary(out: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        out.write_all(b"<<")?;
        for (key, value) in dict.iter() {
            write_name(out, key)?;
            out.write_all(b" ")?;
            write_object(out, value)?;
        }
        out.write_all(b">>")
    }

    fn write_name(out: &mut dyn Write, name: &[u8]) -> io::Result<()> {
        out.write_all(b"/")?;
        for &byte in name {
            let delimiter = b"()<>[]{}/%#".contains(&byte);
            if !(0x21..=0x7E).contains(&byte) || delimiter {
                write!(out, "#{:02X}", byte)?;
            } else {
                out.write_all(&[byte])?;
            }
        }
        Ok(())
    }

    fn write_literal_string(out: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
        out.write_all(b"(")?;
        for &byte in bytes {
            match byte {
                b'(' | b')' | b'\\' => out.write_all(&[b'\\', byte])?,
                b'\r' => out.write_all(b"\\r")?,
                b'\n' => out.write_all(b"\\n")?,
                _ => out.write_all(&[byte])?,
            }
        }
        out.write_all(b")")
    }

    /// Fixed-point with at most four decimals and no trailing zeros.
    pub fn format_real(value: f64) -> String {
        let fixed = format!("{:.4}", value);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        match trimmed {
            "" | "-" | "-0" => "0".to_string(),
            other => other.to_string(),
        }
    }
}
