use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io::{self, BufRead, Lines, Write, stderr, stdin, stdout},
    str::FromStr,
};

use log::debug;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    board_display::BoardDisplay,
    config::Config,
    piece::{ParsePieceError, Piece},
    rules::Rules,
    square::{ParseSquareError, Square},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Input {
    Help,
    New,
    Shuffle,
    Display,
    Available(Option<Square>),
    Put(Square, Option<Piece>),
    Quit,
}
impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Input::Help => write!(f, "help")?,
            Input::New => write!(f, "new")?,
            Input::Shuffle => write!(f, "shuffle")?,
            Input::Display => write!(f, "display")?,
            Input::Available(None) => write!(f, "available")?,
            Input::Available(Some(square)) => write!(f, "available {square}")?,
            Input::Put(square, Some(piece)) => write!(f, "put {square} {}", piece.fen())?,
            Input::Put(square, None) => write!(f, "put {square} .")?,
            Input::Quit => write!(f, "quit")?,
        }
        Ok(())
    }
}
impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (command, rest) = match s.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (s, ""),
        };
        let input = match (command.to_ascii_lowercase().as_str(), rest) {
            ("h" | "help", "") => Input::Help,
            ("n" | "new", "") => Input::New,
            ("s" | "shuffle", "") => Input::Shuffle,
            ("d" | "display", "") => Input::Display,
            ("q" | "quit", "") => Input::Quit,
            ("a" | "available", "") => Input::Available(None),
            ("a" | "available", rest) => Input::Available(Some(rest.parse()?)),
            ("p" | "put", rest) => {
                let (square, piece) = rest
                    .rsplit_once(char::is_whitespace)
                    .ok_or(ParseInputError::MissingPiece)?;
                let piece = match piece {
                    "." => None,
                    piece => Some(piece.parse()?),
                };
                Input::Put(square.parse()?, piece)
            }
            _ => return Err(ParseInputError::UnknownCommand(s.to_owned())),
        };
        Ok(input)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseInputError {
    UnknownCommand(String),
    MissingPiece,
    Square(ParseSquareError),
    Piece(ParsePieceError),
}
impl From<ParseSquareError> for ParseInputError {
    fn from(value: ParseSquareError) -> Self {
        ParseInputError::Square(value)
    }
}
impl From<ParsePieceError> for ParseInputError {
    fn from(value: ParsePieceError) -> Self {
        ParseInputError::Piece(value)
    }
}
impl Display for ParseInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseInputError::UnknownCommand(command) => write!(f, "unknown command `{command}`")?,
            ParseInputError::MissingPiece => write!(f, "expected a square followed by a piece")?,
            ParseInputError::Square(err) => write!(f, "{err}")?,
            ParseInputError::Piece(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for ParseInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseInputError::Square(err) => Some(err),
            ParseInputError::Piece(err) => Some(err),
            _ => None,
        }
    }
}

fn write_help(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "(n)ew board")?;
    writeln!(output, "(s)huffle board")?;
    writeln!(output, "(d)isplay board")?;
    writeln!(output, "(a)vailable moves [square]")?;
    writeln!(output, "(p)ut <square> <piece>  - place a piece, `.` empties the square")?;
    writeln!(output, "(h)elp")?;
    writeln!(output, "(q)uit")?;
    writeln!(output, "squares are written as `row col` (0-7) or as `e2`")?;
    Ok(())
}
fn write_moves(output: &mut impl Write, moves: &[Square]) -> io::Result<()> {
    write!(output, "[")?;
    for (i, square) in moves.iter().enumerate() {
        if i > 0 {
            write!(output, ", ")?;
        }
        write!(output, "{square}")?;
    }
    writeln!(output, "]")?;
    Ok(())
}
/// Asks for a row and a column until they name a square on the board.
/// `None` means the input ended.
fn prompt_square<R, I, O>(
    board: &Board<R>,
    lines: &mut Lines<I>,
    output: &mut O,
) -> io::Result<Option<Square>>
where
    R: Rules,
    I: BufRead,
    O: Write,
{
    loop {
        write!(output, "Row (0-7): ")?;
        output.flush()?;
        let Some(row) = lines.next().transpose()? else {
            return Ok(None);
        };
        write!(output, "Column (0-7): ")?;
        output.flush()?;
        let Some(col) = lines.next().transpose()? else {
            return Ok(None);
        };
        match (row.trim().parse::<i8>(), col.trim().parse::<i8>()) {
            (Ok(row), Ok(col)) if board.is_in_bounds(row, col) => {
                return Ok(Some(Square::new(row, col)));
            }
            _ => writeln!(output, "Invalid location")?,
        }
    }
}

pub fn repl<R>(rules: R, config: &Config) -> io::Result<()>
where
    R: Rules,
{
    run(
        Board::with_rules(rules),
        config.seeded_rng(),
        config,
        stdin().lock(),
        &mut stdout().lock(),
        &mut stderr().lock(),
    )
}
pub fn run<R, I, O, E>(
    mut board: Board<R>,
    mut rng: Option<SmallRng>,
    config: &Config,
    input: I,
    output: &mut O,
    error: &mut E,
) -> io::Result<()>
where
    R: Rules,
    I: BufRead,
    O: Write,
    E: Write,
{
    let mut lines = input.lines();
    let mut highlighted = Vec::new();

    writeln!(output, "type `help` for instructions")?;
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(text) = lines.next().transpose()? else {
            return Ok(());
        };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        let input = match text.parse::<Input>() {
            Ok(input) => input,
            Err(err) => {
                writeln!(error, "Error: {err}")?;
                writeln!(error, "for available command, enter `help`")?;
                continue;
            }
        };
        debug!("command: {input}");
        match input {
            Input::Help => write_help(output)?,
            Input::New => {
                board.reset();
                highlighted.clear();
            }
            Input::Shuffle => {
                match &mut rng {
                    Some(rng) => board.shuffle_with(rng),
                    None => board.shuffle(),
                }
                highlighted.clear();
            }
            Input::Display => {
                let info = format!("{} pieces", board.piece_count());
                write!(
                    output,
                    "{}",
                    BoardDisplay {
                        colors: config.colors,
                        show_coordinates: config.coordinates,
                        highlighted: &highlighted,
                        info: &info,
                        ..BoardDisplay::new(&board)
                    }
                )?;
            }
            Input::Available(square) => {
                let square = match square {
                    Some(square) => square,
                    None => match prompt_square(&board, &mut lines, output)? {
                        Some(square) => square,
                        None => return Ok(()),
                    },
                };
                let moves = match board.get_moves(square.row, square.col) {
                    Ok(moves) => moves,
                    Err(err) => {
                        writeln!(error, "Error: {err}")?;
                        continue;
                    }
                };
                write_moves(output, &moves)?;
                highlighted.clear();
                highlighted.extend(moves.into_iter().filter(|square| square.is_in_bounds()));
            }
            Input::Put(square, piece) => {
                let previous = match board.get_piece(square.row, square.col) {
                    Ok(previous) => previous,
                    Err(err) => {
                        writeln!(error, "Error: {err}")?;
                        continue;
                    }
                };
                if let Some(previous) = previous {
                    debug!("{previous} on {square} replaced");
                }
                if let Err(err) = board.set_piece(piece, square.row, square.col) {
                    writeln!(error, "Error: {err}")?;
                    continue;
                }
                highlighted.clear();
            }
            Input::Quit => return Ok(()),
        }
    }
}
#[cfg(test)]
mod test {
    use rand::{SeedableRng, rngs::SmallRng};

    use crate::{
        board::Board,
        color::Color,
        config::Config,
        piece::{Piece, PieceKind},
        repl::{Input, ParseInputError, run},
        rules::{InBounds, Rules, Standard},
        square::Square,
    };

    fn session(input: &str) -> (String, String) {
        session_with(Board::new(), input)
    }
    fn session_with<R>(board: Board<R>, input: &str) -> (String, String)
    where
        R: Rules,
    {
        session_seeded(board, Some(SmallRng::seed_from_u64(0)), input)
    }
    fn session_seeded<R>(board: Board<R>, rng: Option<SmallRng>, input: &str) -> (String, String)
    where
        R: Rules,
    {
        let config = Config {
            coordinates: false,
            ..Config::default()
        };
        let mut output = Vec::new();
        let mut error = Vec::new();
        run(
            board,
            rng,
            &config,
            input.as_bytes(),
            &mut output,
            &mut error,
        )
        .unwrap();
        (
            String::from_utf8(output).unwrap(),
            String::from_utf8(error).unwrap(),
        )
    }

    #[test]
    fn parse_commands() {
        assert_eq!("n".parse(), Ok(Input::New));
        assert_eq!("S".parse(), Ok(Input::Shuffle));
        assert_eq!("display".parse(), Ok(Input::Display));
        assert_eq!("q".parse(), Ok(Input::Quit));
        assert_eq!("a".parse(), Ok(Input::Available(None)));
        assert_eq!(
            "a 4 4".parse(),
            Ok(Input::Available(Some(Square::new(4, 4))))
        );
        assert_eq!(
            "available e2".parse(),
            Ok(Input::Available(Some(Square::new(6, 4))))
        );
        assert_eq!(
            "put 3,3 Q".parse(),
            Ok(Input::Put(
                Square::new(3, 3),
                Some(Piece::new(PieceKind::Queen, Color::White))
            ))
        );
        assert_eq!("p 0 0 .".parse(), Ok(Input::Put(Square::new(0, 0), None)));
        assert_eq!("p e2".parse::<Input>(), Err(ParseInputError::MissingPiece));
        assert!(matches!(
            "castle".parse::<Input>(),
            Err(ParseInputError::UnknownCommand(_))
        ));
        assert!(matches!(
            "d now".parse::<Input>(),
            Err(ParseInputError::UnknownCommand(_))
        ));
    }
    #[test]
    fn display_prints_board() {
        let (output, error) = session("d\nq\n");
        assert!(output.contains(" ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜  32 pieces\n"));
        assert!(output.contains(" ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖ \n"));
        assert_eq!(error, "");
    }
    #[test]
    fn available_moves_inline() {
        let (output, _) = session("a 1 0\n");
        assert!(output.contains("[(2, 0), (3, 0)]\n"));
        let (output, _) = session("a 4 4\n");
        assert!(output.contains("[]\n"));
    }
    #[test]
    fn available_moves_prompted() {
        let (output, error) = session("a\nx\n1\n9\n0\n7\n6\n");
        assert_eq!(error, "");
        assert_eq!(output.matches("Invalid location\n").count(), 2);
        assert!(output.contains("Row (0-7): Column (0-7): Invalid location\nRow (0-7): "));
        assert!(output.contains(
            "[(6, 8), (8, 8), (5, 7), (9, 7), (5, 5), (9, 5), (6, 4), (8, 4)]\n"
        ));
    }
    #[test]
    fn available_moves_respect_rules() {
        let (output, _) = session_with(Board::with_rules(InBounds(Standard)), "a 7 6\n");
        assert!(output.contains("[(5, 7), (5, 5), (6, 4)]\n"));
    }
    #[test]
    fn available_moves_out_of_bounds() {
        let (_, error) = session("a 8 8\n");
        assert!(error.starts_with("Error: (8, 8) is outside of the board"));
    }
    #[test]
    fn put_then_query() {
        let (output, error) = session("p 4 4 n\na 4 4\n");
        assert_eq!(error, "");
        assert!(output.contains(
            "[(3, 6), (5, 6), (2, 5), (6, 5), (2, 3), (6, 3), (3, 2), (5, 2)]\n"
        ));
    }
    #[test]
    fn highlights_follow_available_moves() {
        let (output, _) = session("a 6 0\nd\n");
        assert!(output.contains("[.] .  .  .  .  .  .  . "));
    }
    #[test]
    fn shuffle_then_new() {
        let (output, _) = session("s\nd\nn\nd\n");
        let boards: Vec<_> = output.match_indices("32 pieces").collect();
        assert_eq!(boards.len(), 2);
        assert!(output.ends_with(" ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖ \n> "));
    }
    #[test]
    fn unseeded_shuffle_keeps_pieces() {
        let (output, error) = session_seeded(Board::new(), None, "s\nd\n");
        assert_eq!(error, "");
        assert!(output.contains("32 pieces"));
    }
    #[test]
    fn put_out_of_bounds_is_reported() {
        let (_, error) = session("p 8 0 Q\n");
        assert!(error.starts_with("Error: (8, 0) is outside of the board"));
    }
    #[test]
    fn unknown_command_reports_and_continues() {
        let (output, error) = session("castle\nh\n");
        assert!(error.starts_with("Error: unknown command `castle`"));
        assert!(output.contains("(s)huffle board"));
    }
}
