//! Canned pages served by the mock search engine and company site.

/// Results page with a single organic result linking to `href`
pub fn search_results_page(href: &str) -> String {
    format!(
        r#"<html><body>
        <div id="search">
          <div class="g"><div class="tF2Cxc">
            <a href="{href}"><h3>Official site</h3></a>
          </div></div>
          <div class="g"><div class="tF2Cxc">
            <a href="https://news.example/other"><h3>Somebody else</h3></a>
          </div></div>
        </div>
        </body></html>"#
    )
}

/// Results page with no organic results, like a CAPTCHA interstitial
pub const BLOCKED_SEARCH_PAGE: &str =
    r#"<html><body><form id="captcha-form">Our systems have detected unusual traffic</form></body></html>"#;

/// Homepage that exercises every extraction rule
pub const GLOBEX_HOMEPAGE: &str = r#"<html>
<head><title>Globex</title><script>var vendor = "NetSuite";</script></head>
<body>
  <h1>Globex Corporation</h1>
  <p>Call +1 612 555 0100.</p>
  <p>Visit us: 100 Main Street, Springfield, IL 62701.</p>
  <p>Globex has 1,200 employees worldwide.</p>
  <p>Our new CEO was appointed in March.</p>
  <p>Annual revenue of $4,500 million in 2023.</p>
  <p>Our strength is logistics.</p>
  <p>Read our latest press release.</p>
  <p>We migrated to Oracle ERP last year.</p>
  <nav>
    <a href="/jobs/1">SAP FICO Consultant</a>
    <a href="/careers">Careers</a>
  </nav>
  <footer>SIC Code: 7372</footer>
</body>
</html>"#;

/// Homepage on which no rule matches
pub const PLAIN_HOMEPAGE: &str =
    "<html><body><h1>Welcome</h1><p>Hello there</p></body></html>";

pub const GENERATED_REPORT: &str = "## Company Fundamentals\n- **Company Name:** Globex\n\nGlobex runs <b>SAP</b> & Oracle.";
