/// Inclusive velocity sampling range in pixels/second, per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpeedRange {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// The closed set of placeable item types.
///
/// Extending the set:
/// - add a variant here and to [`ALL`](ItemKind::ALL)
/// - give it a tag, a sprite file, and (for swimmers) a speed preset
/// - the scene-file dispatch picks it up through [`from_tag`](ItemKind::from_tag)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ItemKind {
    /// Stationary castle decor.
    Castle,
    /// Fast diagonal swimmer.
    Beta,
    /// Slow, mostly horizontal swimmer.
    Nemo,
    /// Fastest swimmer in the tank.
    Dory,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Castle,
        ItemKind::Beta,
        ItemKind::Nemo,
        ItemKind::Dory,
    ];

    /// Type discriminator written to and read from scene files.
    pub const fn tag(self) -> &'static str {
        match self {
            ItemKind::Castle => "castle",
            ItemKind::Beta => "beta",
            ItemKind::Nemo => "nemo",
            ItemKind::Dory => "dory",
        }
    }

    /// Reverse of [`tag`](Self::tag); `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "castle" => Some(ItemKind::Castle),
            "beta" => Some(ItemKind::Beta),
            "nemo" => Some(ItemKind::Nemo),
            "dory" => Some(ItemKind::Dory),
            _ => None,
        }
    }

    /// Image file name under the asset directory.
    pub const fn sprite_file(self) -> &'static str {
        match self {
            ItemKind::Castle => "castle.png",
            ItemKind::Beta => "beta.png",
            ItemKind::Nemo => "nemo.png",
            ItemKind::Dory => "dory.png",
        }
    }

    /// Starting-velocity sampling range; `None` for decor, which never moves.
    pub const fn speed_range(self) -> Option<SpeedRange> {
        match self {
            ItemKind::Castle => None,
            ItemKind::Beta => Some(SpeedRange {
                min_x: 70.0,
                max_x: 100.0,
                min_y: 70.0,
                max_y: 100.0,
            }),
            ItemKind::Nemo => Some(SpeedRange {
                min_x: 20.0,
                max_x: 35.0,
                min_y: -10.0,
                max_y: 10.0,
            }),
            ItemKind::Dory => Some(SpeedRange {
                min_x: 150.0,
                max_x: 200.0,
                min_y: 150.0,
                max_y: 200.0,
            }),
        }
    }

    /// Whether this kind swims (carries motion state).
    pub fn is_fish(self) -> bool {
        self.speed_range().is_some()
    }
}
