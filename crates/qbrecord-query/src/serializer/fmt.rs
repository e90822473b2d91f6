use super::Formatter;
use qbrecord_core::{schema::Fid, Result, Value};

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_query($f)?;
        )*
    }};
}

pub(super) trait ToQuery {
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()>;
}

impl ToQuery for &str {
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

impl ToQuery for Fid {
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(&self.to_string());
        Ok(())
    }
}

/// Values are interpolated as displayed, without escaping.
impl ToQuery for &Value {
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(&self.to_string());
        Ok(())
    }
}
