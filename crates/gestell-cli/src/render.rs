use bat::{PrettyPrinter, WrappingMode};

pub fn markdown(content: &str) {
    print(content, "Markdown", None);
}

pub fn json(content: &str) {
    print(content, "JSON", None);
}

pub fn tool_request(content: &str, tool_name: &str) {
    print(content, "JSON", Some(format!("Tool Request: {}", tool_name)));
}

fn print(content: &str, language: &str, header: Option<String>) {
    let mut printer = PrettyPrinter::new();
    let input = match &header {
        Some(name) => bat::Input::from_bytes(content.as_bytes()).name(name),
        None => bat::Input::from_bytes(content.as_bytes()),
    };
    printer
        .input(input)
        .language(language)
        .grid(header.is_some())
        .header(header.is_some())
        .wrapping_mode(WrappingMode::Character);

    // Fall back to plain output when the terminal can't be highlighted
    if printer.print().is_err() {
        println!("{}", content);
    }
}
