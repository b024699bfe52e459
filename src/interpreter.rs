/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST bottom-up, folding each binary node over
/// its children's values until a single integer remains. It is the core
/// execution engine of the calculator.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing the four arithmetic operations.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful element such as a number,
/// operator, or parenthesis. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Consumes digit runs greedily and discards whitespace silently.
/// - Reports lexical errors for characters outside the grammar.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST representing the expression's structure, using recursive descent
/// with two left-associative precedence levels.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with offset info.
/// - Enforces precedence and associativity without backtracking.
pub mod parser;
/// The printer module renders an AST as indented text.
///
/// The printer walks a tree read-only and produces a deterministic,
/// depth-faithful textual rendering, one line per node. It is a diagnostic
/// and testing aid, not part of the grammar.
///
/// # Responsibilities
/// - Renders each node with its label, shape name, and leaf value.
/// - Indents output by two spaces per nesting level.
pub mod printer;
