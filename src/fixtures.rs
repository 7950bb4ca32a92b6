//! Generadores de archivos de prueba para cada formato soportado.

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use lopdf::{Document, Object, Stream, dictionary};
use std::error::Error;
use std::fs::File;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

pub(crate) type FixtureResult = Result<(), Box<dyn Error>>;

pub(crate) fn create_sample_docx(path: &Path) -> FixtureResult {
    const CORE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties"
                   xmlns:dc="http://purl.org/dc/elements/1.1/"
                   xmlns:dcterms="http://purl.org/dc/terms/"
                   xmlns:dcmitype="http://purl.org/dc/dcmitype/"
                   xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:creator>Autor Prueba</dc:creator>
    <cp:lastModifiedBy>Editor Prueba</cp:lastModifiedBy>
    <dcterms:created xsi:type="dcterms:W3CDTF">2024-01-01T00:00:00Z</dcterms:created>
    <dcterms:modified xsi:type="dcterms:W3CDTF">2024-02-01T09:30:00Z</dcterms:modified>
    <dc:title>Documento Demo</dc:title>
    <dc:subject>Asunto Demo</dc:subject>
    <cp:keywords>demo, prueba</cp:keywords>
    <cp:revision>6</cp:revision>
</cp:coreProperties>
"#;
    write_docx(path, Some(CORE_XML))
}

pub(crate) fn create_docx_without_core(path: &Path) -> FixtureResult {
    write_docx(path, None)
}

fn write_docx(path: &Path, core_xml: Option<&str>) -> FixtureResult {
    const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>
"#;

    const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>
"#;

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:body>
        <w:p><w:r><w:t>Documento de prueba</w:t></w:r></w:p>
    </w:body>
</w:document>
"#;

    let file = File::create(path)?;
    let mut writer = ZipWriter::new(file);
    let options = FileOptions::<'_, ()>::default().compression_method(CompressionMethod::Stored);

    writer.start_file("[Content_Types].xml", options)?;
    writer.write_all(CONTENT_TYPES.as_bytes())?;

    writer.start_file("_rels/.rels", options)?;
    writer.write_all(RELS_XML.as_bytes())?;

    writer.start_file("word/document.xml", options)?;
    writer.write_all(DOCUMENT_XML.as_bytes())?;

    if let Some(core) = core_xml {
        writer.start_file("docProps/core.xml", options)?;
        writer.write_all(core.as_bytes())?;
    }

    writer.finish()?;
    Ok(())
}

/// ZIP valido que no es un documento Word.
pub(crate) fn create_plain_zip(path: &Path) -> FixtureResult {
    let file = File::create(path)?;
    let mut writer = ZipWriter::new(file);
    let options = FileOptions::<'_, ()>::default().compression_method(CompressionMethod::Stored);
    writer.start_file("notas.txt", options)?;
    writer.write_all(b"sin metadata")?;
    writer.finish()?;
    Ok(())
}

pub(crate) fn create_sample_pdf(path: &Path, info: Option<lopdf::Dictionary>) -> FixtureResult {
    let mut doc = single_page_document();
    if let Some(info) = info {
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);
    }

    doc.save(path)?;
    Ok(())
}

/// PDF cuyo `/Author` apunta a un arreglo que se contiene a si mismo.
pub(crate) fn create_pdf_with_cyclic_author(path: &Path) -> FixtureResult {
    let mut doc = single_page_document();
    let loop_id = doc.new_object_id();
    doc.objects
        .insert(loop_id, Object::Array(vec![Object::Reference(loop_id)]));

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Bucle"),
        "Author" => Object::Reference(loop_id),
    });
    doc.trailer.set("Info", info_id);

    doc.save(path)?;
    Ok(())
}

fn single_page_document() -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page_id)],
        "Count" => 1_i64,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(595),
            Object::Integer(842),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// TIFF minimo con campos en IFD0, Exif, GPS, Interoperability y miniatura.
pub(crate) fn create_sample_tiff(path: &Path) -> FixtureResult {
    let ascii = |tag, ifd_num, text: &str| Field {
        tag,
        ifd_num,
        value: Value::Ascii(vec![text.as_bytes().to_vec()]),
    };
    let make = ascii(Tag::Make, In::PRIMARY, "Canon");
    let model = ascii(Tag::Model, In::PRIMARY, "EOS 5D");
    let taken = ascii(Tag::DateTimeOriginal, In::PRIMARY, "2024:05:01 12:00:00");
    let latitude_ref = ascii(Tag::GPSLatitudeRef, In::PRIMARY, "N");
    let latitude = Field {
        tag: Tag::GPSLatitude,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![
            Rational { num: 40, denom: 1 },
            Rational { num: 26, denom: 1 },
            Rational { num: 46, denom: 1 },
        ]),
    };
    let interop = ascii(Tag::InteroperabilityIndex, In::PRIMARY, "R98");
    let thumbnail_orientation = Field {
        tag: Tag::Orientation,
        ifd_num: In::THUMBNAIL,
        value: Value::Short(vec![1]),
    };

    let mut writer = Writer::new();
    for field in [
        &make,
        &model,
        &taken,
        &latitude_ref,
        &latitude,
        &interop,
        &thumbnail_orientation,
    ] {
        writer.push_field(field);
    }

    let mut buffer = Cursor::new(Vec::new());
    writer.write(&mut buffer, false)?;
    std::fs::write(path, buffer.into_inner())?;
    Ok(())
}

/// JPEG sin segmento APP1: solo SOI y EOI.
pub(crate) fn create_jpeg_without_exif(path: &Path) -> FixtureResult {
    std::fs::write(path, [0xFF, 0xD8, 0xFF, 0xD9])?;
    Ok(())
}

/// WAV PCM de 0.1 s con una lista RIFF INFO (INAM/IART).
pub(crate) fn create_sample_wav(path: &Path, title: &str, artist: &str) -> FixtureResult {
    let mut fmt = Vec::new();
    fmt.extend_from_slice(&1u16.to_le_bytes());
    fmt.extend_from_slice(&1u16.to_le_bytes());
    fmt.extend_from_slice(&8000u32.to_le_bytes());
    fmt.extend_from_slice(&16000u32.to_le_bytes());
    fmt.extend_from_slice(&2u16.to_le_bytes());
    fmt.extend_from_slice(&16u16.to_le_bytes());

    let mut info = b"INFO".to_vec();
    for (id, value) in [(b"INAM", title), (b"IART", artist)] {
        let mut text = value.as_bytes().to_vec();
        text.push(0);
        push_chunk(&mut info, id, &text);
    }

    let mut body = b"WAVE".to_vec();
    push_chunk(&mut body, b"fmt ", &fmt);
    push_chunk(&mut body, b"data", &[0u8; 1600]);
    push_chunk(&mut body, b"LIST", &info);

    let mut riff = b"RIFF".to_vec();
    riff.extend_from_slice(&(body.len() as u32).to_le_bytes());
    riff.extend_from_slice(&body);
    std::fs::write(path, riff)?;
    Ok(())
}

fn push_chunk(target: &mut Vec<u8>, id: &[u8; 4], data: &[u8]) {
    target.extend_from_slice(id);
    target.extend_from_slice(&(data.len() as u32).to_le_bytes());
    target.extend_from_slice(data);
    if data.len() % 2 == 1 {
        target.push(0);
    }
}
