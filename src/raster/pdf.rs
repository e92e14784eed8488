use super::Canvas;

/// Resolution the page is sized for; a 1024px plate becomes a 10.24in page
const PIXELS_PER_INCH: f64 = 100.0;
const POINTS_PER_INCH: f64 = 72.0;

/// Single-page PDF with the canvas as an uncompressed DeviceRGB image
///
/// Layout:
/// - 1: catalog, 2: page tree, 3: page
/// - 4: image XObject (8 bits per channel, rows top to bottom)
/// - 5: content stream scaling the image to the full page
pub fn encode_pdf(canvas: &Canvas) -> Vec<u8> {
    let (w, h) = (canvas.width(), canvas.height());
    let page_w = f64::from(w) * POINTS_PER_INCH / PIXELS_PER_INCH;
    let page_h = f64::from(h) * POINTS_PER_INCH / PIXELS_PER_INCH;

    let mut pdf = PdfBuilder::new();
    pdf.object("<< /Type /Catalog /Pages 2 0 R >>");
    pdf.object("<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
    pdf.object(&format!(
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_w:.2} {page_h:.2}] \
         /Resources << /XObject << /Im0 4 0 R >> >> /Contents 5 0 R >>"
    ));

    let pixels = canvas.as_image().as_raw();
    pdf.stream(
        &format!(
            "<< /Type /XObject /Subtype /Image /Width {w} /Height {h} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 /Length {} >>",
            pixels.len()
        ),
        pixels,
    );

    let content = format!("q\n{page_w:.2} 0 0 {page_h:.2} 0 0 cm\n/Im0 Do\nQ\n");
    pdf.stream(
        &format!("<< /Length {} >>", content.len()),
        content.as_bytes(),
    );

    pdf.finish(1)
}

/// Appends numbered objects and remembers their byte offsets for the xref table
struct PdfBuilder {
    bytes: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfBuilder {
    fn new() -> Self {
        Self {
            bytes: b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n".to_vec(),
            offsets: Vec::new(),
        }
    }

    fn begin(&mut self) {
        self.offsets.push(self.bytes.len());
        let id = self.offsets.len();
        self.bytes.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
    }

    fn object(&mut self, body: &str) {
        self.begin();
        self.bytes.extend_from_slice(body.as_bytes());
        self.bytes.extend_from_slice(b"\nendobj\n");
    }

    fn stream(&mut self, dict: &str, data: &[u8]) {
        self.begin();
        self.bytes.extend_from_slice(dict.as_bytes());
        self.bytes.extend_from_slice(b"\nstream\n");
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\nendstream\nendobj\n");
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        let xref_offset = self.bytes.len();
        let count = self.offsets.len() + 1;

        // every xref entry is exactly 20 bytes
        let mut xref = format!("xref\n0 {count}\n0000000000 65535 f \n");
        for offset in &self.offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {count} /Root {root} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
        ));

        self.bytes.extend_from_slice(xref.as_bytes());
        self.bytes
    }
}
