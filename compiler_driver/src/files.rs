use std::process::Command;

// this module contain file management functions

/// pre-process the source file, return a path to the pre-processed file
pub fn pre_process_file(file_path: &str) -> String {
    let file_name = format!("{}.i", remove_file_extension(get_file_name(file_path)));
    let pre_processed_file = set_file_name(file_path, &file_name);
    Command::new("gcc")
        .args(["-E", "-P", file_path, "-o", &pre_processed_file])
        .output()
        .expect("failed to pre-process the program");
    pre_processed_file
}

/// assemble and link the given assembly file into an executable
pub fn compile_assembly_file(file_path: &str, output_file_path: &str) {
    Command::new("gcc")
        .args([file_path, "-o", output_file_path])
        .output()
        .expect("failed to compile assembly file");
}

/// remove the file extension from a path
pub fn remove_file_extension(file_path: &str) -> &str {
    let dot_index = file_path.rfind('.').expect("invalid source file name");
    &file_path[..dot_index]
}

pub fn delete_file(file_path: &str) {
    let _ = std::fs::remove_file(file_path);
}

/// return a new path with the new file name, keeping the same directory
pub fn set_file_name(file_path: &str, file_name: &str) -> String {
    let mut path: Vec<&str> = file_path.split('/').collect();
    path.pop();

    let mut new_path = String::new();
    for item in path {
        new_path.push_str(item);
        new_path.push('/');
    }

    new_path.push_str(file_name);
    new_path
}

/// return a reference to the file name
pub fn get_file_name(file_path: &str) -> &str {
    let path: Vec<&str> = file_path.split('/').collect();
    path.last().expect("failed to fetch file name")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_file_name_keeps_the_directory() {
        assert_eq!(set_file_name("/tmp/src/main.c", "main.s"), "/tmp/src/main.s");
    }

    #[test]
    fn set_file_name_handles_a_bare_file_name() {
        assert_eq!(set_file_name("main.c", "main.s"), "main.s");
    }

    #[test]
    fn remove_file_extension_strips_the_last_dot_segment() {
        assert_eq!(remove_file_extension("/tmp/src/main.c"), "/tmp/src/main");
        assert_eq!(remove_file_extension("main.pre_process.i"), "main.pre_process");
    }

    #[test]
    fn get_file_name_returns_the_last_path_segment() {
        assert_eq!(get_file_name("/tmp/src/main.c"), "main.c");
        assert_eq!(get_file_name("main.c"), "main.c");
    }
}
