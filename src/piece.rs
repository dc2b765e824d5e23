use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}
impl PieceKind {
    pub const STARTING_CONFIGURATION: [Self; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    pub fn uppercase(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
    pub fn lowercase(self) -> char {
        self.uppercase().to_ascii_lowercase()
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}
impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }
    pub fn fen(self) -> char {
        match self.color {
            Color::White => self.kind.uppercase(),
            Color::Black => self.kind.lowercase(),
        }
    }
    pub fn figurine(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)?;
        Ok(())
    }
}
impl TryFrom<char> for Piece {
    type Error = ParsePieceError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let (color, kind) = match value {
            'P' | '♙' => (Color::White, PieceKind::Pawn),
            'N' | '♘' => (Color::White, PieceKind::Knight),
            'B' | '♗' => (Color::White, PieceKind::Bishop),
            'R' | '♖' => (Color::White, PieceKind::Rook),
            'Q' | '♕' => (Color::White, PieceKind::Queen),
            'K' | '♔' => (Color::White, PieceKind::King),
            'p' | '♟' => (Color::Black, PieceKind::Pawn),
            'n' | '♞' => (Color::Black, PieceKind::Knight),
            'b' | '♝' => (Color::Black, PieceKind::Bishop),
            'r' | '♜' => (Color::Black, PieceKind::Rook),
            'q' | '♛' => (Color::Black, PieceKind::Queen),
            'k' | '♚' => (Color::Black, PieceKind::King),
            c => return Err(ParsePieceError::UnknownSymbol(c)),
        };
        Ok(Piece::new(kind, color))
    }
}
impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut characters = s.chars();
        let piece = characters
            .next()
            .ok_or(ParsePieceError::Empty)?
            .try_into()?;

        if let Some(c) = characters.next() {
            return Err(ParsePieceError::UnexpectedSymbol(c));
        }
        Ok(piece)
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsePieceError {
    Empty,
    UnknownSymbol(char),
    UnexpectedSymbol(char),
}
impl Display for ParsePieceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParsePieceError::Empty => write!(f, "expected one character, found none instead")?,
            ParsePieceError::UnknownSymbol(c) => write!(
                f,
                "`{c}` is neither of `p`, `n`, `b`, `r`, `q`, `k`, uppercase letter of any of these, or unicode chess symbols"
            )?,
            ParsePieceError::UnexpectedSymbol(c) => {
                write!(f, "unexpected `{c}`, only one character is expected")?;
            }
        }
        Ok(())
    }
}
impl Error for ParsePieceError {}

#[cfg(test)]
mod test {
    use rustc_hash::FxHashSet;

    use crate::{
        color::Color,
        piece::{ParsePieceError, Piece, PieceKind},
    };

    const ALL_KINDS: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    #[test]
    fn twelve_distinct_figurines() {
        let figurines: FxHashSet<_> = Color::ALL
            .into_iter()
            .flat_map(|color| ALL_KINDS.map(|kind| Piece::new(kind, color).figurine()))
            .collect();
        assert_eq!(figurines.len(), 12);
    }
    #[test]
    fn figurine_and_fen_parse_back() {
        for color in Color::ALL {
            for kind in ALL_KINDS {
                let piece = Piece::new(kind, color);
                assert_eq!(Piece::try_from(piece.figurine()), Ok(piece));
                assert_eq!(Piece::try_from(piece.fen()), Ok(piece));
            }
        }
    }
    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Piece>(), Err(ParsePieceError::Empty));
        assert_eq!("x".parse::<Piece>(), Err(ParsePieceError::UnknownSymbol('x')));
        assert_eq!(
            "Qq".parse::<Piece>(),
            Err(ParsePieceError::UnexpectedSymbol('q'))
        );
        assert_eq!(
            "n".parse(),
            Ok(Piece::new(PieceKind::Knight, Color::Black))
        );
    }
}
