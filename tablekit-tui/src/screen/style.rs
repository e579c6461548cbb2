#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            italic: false,
            underline: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// Foreground, background and text attributes for a run of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
}

impl Paint {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            style: TextStyle::new(),
        }
    }

    pub const fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// Named colors used by the table screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
    pub primary: Rgb,
    pub surface: Rgb,
    pub stripe: Rgb,
    pub border: Rgb,
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            background: Rgb::new(18, 18, 24),
            foreground: Rgb::new(220, 220, 228),
            muted: Rgb::new(120, 120, 136),
            primary: Rgb::new(122, 162, 247),
            surface: Rgb::new(36, 36, 48),
            stripe: Rgb::new(24, 24, 32),
            border: Rgb::new(64, 64, 80),
        }
    }

    pub const fn text(&self) -> Paint {
        Paint::new(self.foreground, self.background)
    }

    pub const fn muted(&self) -> Paint {
        Paint::new(self.muted, self.background)
    }

    pub const fn header(&self) -> Paint {
        Paint::new(self.primary, self.surface).with_style(TextStyle::new().bold())
    }

    pub const fn row(&self, stripe: bool) -> Paint {
        if stripe {
            Paint::new(self.foreground, self.stripe)
        } else {
            Paint::new(self.foreground, self.background)
        }
    }

    pub const fn input(&self) -> Paint {
        Paint::new(self.foreground, self.surface).with_style(TextStyle::new().underline())
    }

    pub const fn button(&self, enabled: bool) -> Paint {
        if enabled {
            Paint::new(self.primary, self.surface).with_style(TextStyle::new().bold())
        } else {
            Paint::new(self.muted, self.background).with_style(TextStyle::new().dim())
        }
    }

    pub const fn border(&self) -> Paint {
        Paint::new(self.border, self.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
