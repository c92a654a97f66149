use super::CommandError;

/// Splits an input line into whitespace-separated tokens.
///
/// Single or double quotes group characters (including whitespace) into one
/// token; the quotes themselves are dropped. Empty quotes produce an empty token.
pub fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(CommandError::InvalidArguments(format!("unterminated {q} quote")));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
