use crate::{DimenMap, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Renders a `dimens.xml` resource file.
///
/// ```xml
/// <?xml version="1.0" encoding="utf-8"?>
/// <resources>
///     <dimen name="1dp" translatable="false">1.5dp</dimen>
/// </resources>
/// ```
pub fn render_dimens(dimens: &DimenMap) -> Result<String> {
    let mut buf = Vec::with_capacity(64 * (dimens.len() + 1));
    let mut w = Writer::new_with_indent(&mut buf, b' ', 4);
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    w.write_event(Event::Start(BytesStart::new("resources")))?;
    for dimen in dimens {
        let name = dimen.name();
        let value = dimen.value();
        let mut start = BytesStart::new("dimen");
        start.push_attribute(("name", name.as_str()));
        start.push_attribute(("translatable", "false"));
        w.write_event(Event::Start(start))?;
        w.write_event(Event::Text(BytesText::new(&value)))?;
        w.write_event(Event::End(BytesEnd::new("dimen")))?;
    }
    w.write_event(Event::End(BytesEnd::new("resources")))?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}
