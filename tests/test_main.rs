use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;

const PAGE: &str = r#"<html>
<body>
<a href="http://example.com/page">absolute</a>
<p>no links on this line, not even http://example.com/skipped</p>
<A HREF="/local/path">relative</A>
<a href="files/my file.txt">spaced</a> <a href='mailto:someone@x.edu'>mail</a>
<A href="/mixed/case">ignored</A>
</body>
</html>
"#;

fn urlgrep() -> Command {
    Command::cargo_bin("urlgrep").unwrap()
}

#[test]
/// no arguments at all prints usage and exits 1
fn main_no_arguments() {
    urlgrep()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("Usage: urlgrep [-a] url url ...")
                .and(predicate::str::contains("-a: only print absolute URLs")),
        );
}

#[test]
/// a leading flag other than -a is rejected before anything is fetched
fn main_unknown_flag() {
    let srv = MockServer::start();
    let mock = srv.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(PAGE);
    });

    urlgrep()
        .arg("-v")
        .arg(srv.url("/"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage: urlgrep"));

    assert_eq!(mock.hits(), 0);
}

#[test]
/// -a on its own is a usage error with its own exit code
fn main_absolute_flag_alone() {
    urlgrep()
        .arg("-a")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Usage: urlgrep"));
}

#[test]
/// default mode prints every href value, cleaned up, one per line
fn main_prints_all_links() {
    let srv = MockServer::start();
    let mock = srv.mock(|when, then| {
        when.method(GET).path("/index.html");
        then.status(200)
            .header("content-type", "text/html")
            .body(PAGE);
    });

    urlgrep()
        .arg(srv.url("/index.html"))
        .assert()
        .success()
        .stdout(
            "http://example.com/page\n/local/path\nfiles/my+file.txt\n'mailto:someone@x.edu'\n\n",
        );

    mock.assert();
}

#[test]
/// -a only prints absolute URLs and mailto addresses
fn main_prints_absolute_links() {
    let srv = MockServer::start();
    let mock = srv.mock(|when, then| {
        when.method(GET).path("/index.html");
        then.status(200).body(PAGE);
    });

    urlgrep()
        .arg("-a")
        .arg(srv.url("/index.html"))
        .assert()
        .success()
        .stdout("http://example.com/page\nmailto:someone@x.edu\n\n");

    mock.assert();
}

#[test]
/// a page without anchor tags prints an empty block
fn main_page_without_links() {
    let srv = MockServer::start();
    srv.mock(|when, then| {
        when.method(GET).path("/empty");
        then.status(200).body("<html><p>nothing here</p></html>\n");
    });

    urlgrep()
        .arg(srv.url("/empty"))
        .assert()
        .success()
        .stdout("\n");
}

#[test]
/// each URL is processed in the order given
fn main_multiple_urls_in_order() {
    let srv = MockServer::start();
    srv.mock(|when, then| {
        when.method(GET).path("/one");
        then.status(200).body("<a href=\"/first\">1</a>\n");
    });
    srv.mock(|when, then| {
        when.method(GET).path("/two");
        then.status(200).body("<a href=\"/second\">2</a>\n");
    });

    urlgrep()
        .arg(srv.url("/one"))
        .arg(srv.url("/two"))
        .assert()
        .success()
        .stdout("/first\n\n/second\n\n");
}

#[test]
/// a malformed URL aborts the run, later URLs are never fetched
fn main_bad_url_stops_the_run() {
    let srv = MockServer::start();
    let mock = srv.mock(|when, then| {
        when.method(GET).path("/later");
        then.status(200).body(PAGE);
    });

    urlgrep()
        .arg("not-a-url")
        .arg(srv.url("/later"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid URL 'not-a-url'"));

    assert_eq!(mock.hits(), 0);
}

#[test]
/// earlier pages are printed before a failing fetch ends the run
fn main_http_error_after_success() {
    let srv = MockServer::start();
    srv.mock(|when, then| {
        when.method(GET).path("/ok");
        then.status(200).body("<a href=\"/fine\">ok</a>\n");
    });
    srv.mock(|when, then| {
        when.method(GET).path("/gone");
        then.status(404);
    });

    urlgrep()
        .arg(srv.url("/ok"))
        .arg(srv.url("/gone"))
        .assert()
        .code(1)
        .stdout("/fine\n\n")
        .stderr(predicate::str::contains("404"));
}

#[test]
/// a second -a is taken as a URL: it fails to fetch instead of being a usage error
fn main_repeated_absolute_flag_is_fetched_as_url() {
    let srv = MockServer::start();
    let mock = srv.mock(|when, then| {
        when.method(GET).path("/later");
        then.status(200).body(PAGE);
    });

    urlgrep()
        .arg("-a")
        .arg("-a")
        .arg(srv.url("/later"))
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Invalid URL '-a'")
                .and(predicate::str::contains("Usage:").not()),
        );

    assert_eq!(mock.hits(), 0);
}
