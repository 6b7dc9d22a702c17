use crate::*;

pub mod materials {
    use crate::*;

    pub trait MaterialImpl {
        /// Surface colour at `pos`, before any lighting.
        fn albedo(&self, pos: &P3) -> RGB;
        fn base_color(&self) -> RGB;
    }

    /// Plain base colour.
    #[derive(Clone, Debug)]
    pub struct Matte(pub RGB);

    impl MaterialImpl for Matte {
        fn albedo(&self, _pos: &P3) -> RGB {
            self.0
        }

        fn base_color(&self) -> RGB {
            self.0
        }
    }

    /// Base colour darkened by the hash noise texture.
    #[derive(Clone, Debug)]
    pub struct Mottled(pub RGB);

    impl MaterialImpl for Mottled {
        fn albedo(&self, pos: &P3) -> RGB {
            texture::mottle(self.0, pos)
        }

        fn base_color(&self) -> RGB {
            self.0
        }
    }
}

#[derive(Clone, Debug)]
pub enum Material {
    Matte(materials::Matte),
    Mottled(materials::Mottled),
}
use materials::MaterialImpl;

impl_wrap_from_many! {Material, materials, [Matte, Mottled]}

use Material::*;
impl Material {
    pub fn new_matte(color: RGB) -> Self {
        Matte(materials::Matte(color))
    }

    pub fn new_mottled(color: RGB) -> Self {
        Mottled(materials::Mottled(color))
    }

    pub fn albedo(&self, pos: &P3) -> RGB {
        match self {
            Matte(m) => m.albedo(pos),
            Mottled(m) => m.albedo(pos),
        }
    }

    pub fn base_color(&self) -> RGB {
        match self {
            Matte(m) => m.base_color(),
            Mottled(m) => m.base_color(),
        }
    }
}
