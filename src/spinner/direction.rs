/// Which way an angle button points. Up and right count up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    #[default]
    Down,
}

impl Direction {
    pub fn step(&self) -> i32 {
        match self {
            Direction::Up | Direction::Right => 1,
            Direction::Left | Direction::Down => -1,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Button pair for a number input, in layout order.
    pub fn pair(vertical: bool) -> (Direction, Direction) {
        match vertical {
            true => (Direction::Up, Direction::Down),
            false => (Direction::Left, Direction::Right),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Normal,
    Large,
}

impl ButtonSize {
    pub fn icon_px(&self) -> u32 {
        match self {
            ButtonSize::Normal => 20,
            ButtonSize::Large => 32,
        }
    }

    pub fn input_class(&self) -> &'static str {
        match self {
            ButtonSize::Normal => "",
            ButtonSize::Large => "is-medium",
        }
    }
}
