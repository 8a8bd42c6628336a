//! 方向（Direction）

/// 駒の移動方向（先手視点）
///
/// 北は1段目（後手陣）側、東は1筋側。オフセットは線形インデックス
/// （`rank * 9 + file`）上の差分。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    /// 桂馬の跳び（北北東）
    NorthNorthEast,
    NorthNorthWest,
    SouthSouthEast,
    SouthSouthWest,
}

impl Direction {
    /// 方向の数
    pub const NUM: usize = 12;

    /// 全ての方向
    pub const ALL: [Direction; 12] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthNorthEast,
        Direction::NorthNorthWest,
        Direction::SouthSouthEast,
        Direction::SouthSouthWest,
    ];

    /// 線形インデックス上のオフセット
    #[inline]
    pub const fn offset(self) -> i8 {
        match self {
            Direction::North => -9,
            Direction::South => 9,
            Direction::East => -1,
            Direction::West => 1,
            Direction::NorthEast => -10,
            Direction::NorthWest => -8,
            Direction::SouthEast => 8,
            Direction::SouthWest => 10,
            Direction::NorthNorthEast => -19,
            Direction::NorthNorthWest => -17,
            Direction::SouthSouthEast => 17,
            Direction::SouthSouthWest => 19,
        }
    }

    /// 東（1筋側）へ1筋動くか
    #[inline]
    pub const fn crosses_east(self) -> bool {
        matches!(
            self,
            Direction::East
                | Direction::NorthEast
                | Direction::SouthEast
                | Direction::NorthNorthEast
                | Direction::SouthSouthEast
        )
    }

    /// 西（9筋側）へ1筋動くか
    #[inline]
    pub const fn crosses_west(self) -> bool {
        matches!(
            self,
            Direction::West
                | Direction::NorthWest
                | Direction::SouthWest
                | Direction::NorthNorthWest
                | Direction::SouthSouthWest
        )
    }

    /// 上下反転（後手視点の方向）
    #[inline]
    pub const fn flipped_vertically(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::East,
            Direction::West => Direction::West,
            Direction::NorthEast => Direction::SouthEast,
            Direction::NorthWest => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthEast,
            Direction::SouthWest => Direction::NorthWest,
            Direction::NorthNorthEast => Direction::SouthSouthEast,
            Direction::NorthNorthWest => Direction::SouthSouthWest,
            Direction::SouthSouthEast => Direction::NorthNorthEast,
            Direction::SouthSouthWest => Direction::NorthNorthWest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_flip_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.flipped_vertically().flipped_vertically(), dir);
        }
    }

    #[test]
    fn test_direction_flip_negates_vertical_component() {
        for dir in Direction::ALL {
            let offset = dir.offset() as i32;
            let flipped = dir.flipped_vertically().offset() as i32;
            // 横成分（-1, 0, +1）は保たれ、縦成分（9の倍数）は符号が反転する
            let horizontal = (offset + 27).rem_euclid(9);
            let horizontal = if horizontal > 4 { horizontal - 9 } else { horizontal };
            assert_eq!(flipped - horizontal, -(offset - horizontal), "{dir:?}");
            assert_eq!(dir.flipped_vertically().crosses_east(), dir.crosses_east());
            assert_eq!(dir.flipped_vertically().crosses_west(), dir.crosses_west());
        }
    }

    #[test]
    fn test_direction_edge_flags_match_offsets() {
        for dir in Direction::ALL {
            let horizontal = (dir.offset() as i32).rem_euclid(9);
            match horizontal {
                0 => assert!(!dir.crosses_east() && !dir.crosses_west(), "{dir:?}"),
                8 => assert!(dir.crosses_east(), "{dir:?}"),
                1 => assert!(dir.crosses_west(), "{dir:?}"),
                _ => unreachable!("{dir:?}"),
            }
        }
    }
}
