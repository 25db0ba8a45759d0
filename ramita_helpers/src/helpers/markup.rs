use std::borrow::Cow;

/// Render trait, used to print attribute values in their universal string
/// form. String types pass through verbatim, numbers print in invariant
/// decimal form.
pub trait Render {
    fn render(&self, buf: &mut String);
}

impl<T: Render + ?Sized> Render for &T {
    #[inline(always)]
    fn render(&self, buf: &mut String) {
        (**self).render(buf)
    }
}

macro_rules! str_render {
    ($($ty:ty)*) => {
        $(
            impl Render for $ty {
                #[inline(always)]
                fn render(&self, buf: &mut String) {
                    buf.push_str(self)
                }
            }
        )*
    };
}

#[rustfmt::skip]
str_render!(str String Cow<'_, str>);

macro_rules! itoa_render {
    ($($ty:ty)*) => {
        $(
            impl Render for $ty {
                #[inline(always)]
                fn render(&self, buf: &mut String) {
                    buf.push_str(itoa::Buffer::new().format(*self))
                }
            }
        )*
    };
}

#[rustfmt::skip]
itoa_render! {
    u8 u16 u32 u64 u128 usize
    i8 i16 i32 i64 i128 isize
}

macro_rules! dtoa_render {
    ($($ty:ty)*) => {
        $(
            impl Render for $ty {
                #[inline(always)]
                fn render(&self, buf: &mut String) {
                    buf.push_str(dtoa::Buffer::new().format(*self))
                }
            }
        )*
    };
}

#[rustfmt::skip]
dtoa_render! {
    f32 f64
}

impl Render for bool {
    #[inline(always)]
    fn render(&self, buf: &mut String) {
        buf.push_str(if *self { "true" } else { "false" })
    }
}

impl Render for char {
    #[inline(always)]
    fn render(&self, buf: &mut String) {
        buf.push(*self)
    }
}

#[inline]
fn entity(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        '&' => Some("&amp;"),
        _ => None,
    }
}

/// Escape the five markup-significant characters of text content.
///
/// Every other character, non-ASCII included, passes through unchanged.
/// Borrows the input when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    let first = match text.find(|c: char| entity(c).is_some()) {
        Some(i) => i,
        None => return Cow::Borrowed(text),
    };
    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match entity(c) {
            Some(e) => out.push_str(e),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}
