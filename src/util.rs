#[macro_export]
macro_rules! impl_wrap_from_many {
    ($t:ident, $m:ident, [$($var:ident),*]) => {
        $(impl From<$m::$var> for $t {
            fn from(m: $m::$var) -> Self {
                $t::$var(m)
            }
        })*
    };
}

/// `path` with `_NNN` inserted before its extension.
pub fn numbered_path(path: &str, index: usize) -> String {
    match path.rfind('.') {
        Some(dot) if !path[dot..].contains('/') => {
            format!("{}_{:03}{}", &path[..dot], index, &path[dot..])
        }
        _ => format!("{}_{:03}", path, index),
    }
}
