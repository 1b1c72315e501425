/// The lexer module tokenizes expression text.
///
/// The lexer reads evaluator notation (`.` decimals) and produces numbers,
/// operators and parentheses, each tagged with its byte offset. Sign minuses
/// are folded into the number they precede.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Rejects characters outside the expression alphabet.
/// - Reports literals that overflow `f64`.
pub mod lexer;
/// The parser module evaluates a token stream.
///
/// The parser descends through one function per precedence tier and folds
/// each tier left to right while it parses, so no syntax tree is kept.
///
/// # Responsibilities
/// - Applies `*` and `/` before `+` and `-`, honouring parentheses.
/// - Reports malformed input, division by zero and overflow.
pub mod parser;

pub use parser::core::evaluate;
