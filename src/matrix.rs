//! Square bit matrices produced by the symbol encoder, and the tight bounds
//! of their dark modules.

/// A square grid of modules, `true` = dark, stored row-major from the top-left.
///
/// The renderer only ever reads a matrix; construction belongs to the
/// encoder (or to tests).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BitMatrix {
    width: u32,
    bits: Vec<bool>,
}

impl BitMatrix {
    /// Creates an all-light matrix of `width × width` modules.
    pub fn new(width: u32) -> Self {
        let len = width as usize * width as usize;
        Self {
            width,
            bits: vec![false; len],
        }
    }

    /// Builds a matrix by evaluating `f(x, y)` for every cell.
    pub fn from_fn(width: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity(width as usize * width as usize);
        for y in 0..width {
            for x in 0..width {
                bits.push(f(x, y));
            }
        }
        Self { width, bits }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.width
    }

    /// Returns whether the module at `(x, y)` is dark. Out-of-range
    /// coordinates read as light.
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.width && self.bits[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, dark: bool) {
        assert!(x < self.width && y < self.width, "Module coordinates out of range");
        let i = self.index(x, y);
        self.bits[i] = dark;
    }

    /// Iterates over the coordinates of every dark module in row-major order.
    pub fn dark_modules(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width;
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &dark)| dark)
            .map(move |(i, _)| ((i as u32) % w, (i as u32) / w))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Inclusive pixel bounds of the smallest rectangle containing every dark module.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Bounds {
    /// Scans `matrix` once and returns the tight box around its dark modules,
    /// or `None` when the matrix has no dark module at all.
    pub fn detect(matrix: &BitMatrix) -> Option<Bounds> {
        let mut found: Option<Bounds> = None;
        for (x, y) in matrix.dark_modules() {
            let b = found.get_or_insert(Bounds {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
            });
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        found
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}
