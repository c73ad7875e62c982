use std::process::{Command, Stdio};

use crate::config::API_URL;

/// Checks if the `Todo` server is already running for windows
///
/// # Arguments
/// * `port` server port
#[cfg(windows)]
pub fn is_server_running(port: &str) -> anyhow::Result<bool> {
    let address = format!("127.0.0.1:{}", port);
    let cmd_netstat = Command::new("netstat")
        .arg("-ano")
        .stdout(Stdio::piped())
        .spawn()?;

    let cmd_netstat = cmd_netstat.wait_with_output()?;

    let output = String::from_utf8(cmd_netstat.stdout)?;

    Ok(output.contains(&address))
}

/// Checks if `Todo` server is running macos
/// # Arguments
/// * `port` server port
#[cfg(target_os = "macos")]
pub fn is_server_running(port: &str) -> anyhow::Result<bool> {
    let address = format!("localhost:{}", port);
    let cmd_lsof = Command::new("lsof")
        .arg("-i")
        .arg("-P")
        .stdout(Stdio::piped())
        .spawn()?;

    let cmd_grep = Command::new("grep")
        .arg("LISTEN")
        .stdin(Stdio::from(cmd_lsof.stdout.unwrap()))
        .stdout(Stdio::piped())
        .spawn()?;

    let cmd_result = cmd_grep.wait_with_output()?;

    let output = String::from_utf8(cmd_result.stdout)?;

    Ok(output.contains(&address))
}

/// Checks if `Todo` server is running, linux
/// # Arguments
/// * `port` server port
#[cfg(target_os = "linux")]
pub fn is_server_running(port: &str) -> anyhow::Result<bool> {
    let address = format!(":{}", port);
    let cmd_ss = Command::new("ss")
        .arg("-ltn")
        .stdout(Stdio::piped())
        .spawn()?;

    let cmd_ss = cmd_ss.wait_with_output()?;

    let output = String::from_utf8(cmd_ss.stdout)?;

    Ok(output
        .lines()
        .any(|line| line.split_whitespace().any(|col| col.ends_with(&address))))
}

pub fn make_api_url(resource: &str) -> String {
    format!("http://{}/api/{}", API_URL.as_str(), resource)
}

#[cfg(test)]
mod utils_test {
    use super::make_api_url;

    #[test]
    fn test_make_api_url() {
        let api_url = make_api_url("todos");

        assert_eq!(api_url, String::from("http://localhost:8080/api/todos"));
    }

    #[test]
    fn test_make_api_url_with_resource_id() {
        let api_url = make_api_url("todos/4f6b10a2");

        assert_eq!(
            api_url,
            String::from("http://localhost:8080/api/todos/4f6b10a2")
        );
    }
}
