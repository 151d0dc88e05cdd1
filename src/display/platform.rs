use crate::{
    foundation::core::Size,
    raster::format::PixelFormat,
    raster::framebuffer::DisplayShape,
};

/// Watch hardware generations the face targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Aplite,
    Basalt,
    Chalk,
    Diorite,
    Emery,
}

impl Platform {
    pub const ALL: [Self; 5] = [
        Self::Aplite,
        Self::Basalt,
        Self::Chalk,
        Self::Diorite,
        Self::Emery,
    ];

    pub fn size(self) -> Size {
        match self {
            Self::Aplite | Self::Basalt | Self::Diorite => Size::new(144, 168),
            Self::Chalk => Size::new(180, 180),
            Self::Emery => Size::new(200, 228),
        }
    }

    pub fn format(self) -> PixelFormat {
        match self {
            Self::Aplite | Self::Diorite => PixelFormat::PackedMonochrome,
            Self::Basalt | Self::Chalk | Self::Emery => PixelFormat::IndexedByte,
        }
    }

    pub fn shape(self) -> DisplayShape {
        match self {
            Self::Chalk => DisplayShape::Round,
            _ => DisplayShape::Rect,
        }
    }

    /// Em height of the clock digits.
    pub fn font_size(self) -> u16 {
        match self {
            Self::Emery => 138,
            _ => 100,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aplite => "aplite",
            Self::Basalt => "basalt",
            Self::Chalk => "chalk",
            Self::Diorite => "diorite",
            Self::Emery => "emery",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
