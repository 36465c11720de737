#![deny(missing_docs)]

//! # Code Samples
//!
//! Request snippets written into the `code` component, one per language tab.

use url::Url;

/// Languages the renderer can write samples for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLanguage {
    /// `curl` command line.
    Shell,
    /// Raw HTTP request.
    Http,
    /// Browser `fetch`.
    JavaScript,
    /// Node.js with `node-fetch`.
    NodeJs,
    /// `rest-client` gem.
    Ruby,
    /// `requests` library.
    Python,
    /// `HttpURLConnection`.
    Java,
    /// `net/http`.
    Go,
}

impl SampleLanguage {
    /// Every language, in the default tab order.
    pub const ALL: [SampleLanguage; 8] = [
        SampleLanguage::Shell,
        SampleLanguage::Http,
        SampleLanguage::JavaScript,
        SampleLanguage::NodeJs,
        SampleLanguage::Ruby,
        SampleLanguage::Python,
        SampleLanguage::Java,
        SampleLanguage::Go,
    ];

    /// Fence label, used as the key of the recovered sample.
    pub fn label(&self) -> &'static str {
        match self {
            SampleLanguage::Shell => "shell",
            SampleLanguage::Http => "http",
            SampleLanguage::JavaScript => "javascript",
            SampleLanguage::NodeJs => "javascript--nodejs",
            SampleLanguage::Ruby => "ruby",
            SampleLanguage::Python => "python",
            SampleLanguage::Java => "java",
            SampleLanguage::Go => "go",
        }
    }

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            SampleLanguage::Shell => "Shell",
            SampleLanguage::Http => "HTTP",
            SampleLanguage::JavaScript => "JavaScript",
            SampleLanguage::NodeJs => "Node.JS",
            SampleLanguage::Ruby => "Ruby",
            SampleLanguage::Python => "Python",
            SampleLanguage::Java => "Java",
            SampleLanguage::Go => "Go",
        }
    }
}

/// What a sample needs to know about the request.
#[derive(Debug, Clone, Copy)]
pub struct SampleRequest<'a> {
    /// Upper-case HTTP method.
    pub method: &'a str,
    /// Absolute or server-relative URL, path template left as is.
    pub url: &'a str,
    /// `Content-Type` of the request body, if any.
    pub content_type: Option<&'a str>,
    /// `Accept` media type, if any.
    pub accept: Option<&'a str>,
}

impl SampleRequest<'_> {
    fn headers(&self) -> Vec<(&'static str, &str)> {
        let mut headers = Vec::new();
        if let Some(content_type) = self.content_type {
            headers.push(("Content-Type", content_type));
        }
        if let Some(accept) = self.accept {
            headers.push(("Accept", accept));
        }
        headers
    }
}

/// Writes the sample body (without fences) for `language`.
pub fn render_sample(language: SampleLanguage, request: &SampleRequest<'_>) -> String {
    match language {
        SampleLanguage::Shell => shell(request),
        SampleLanguage::Http => http(request),
        SampleLanguage::JavaScript => javascript(request),
        SampleLanguage::NodeJs => {
            format!("const fetch = require('node-fetch');\n\n{}", javascript(request))
        }
        SampleLanguage::Ruby => ruby(request),
        SampleLanguage::Python => python(request),
        SampleLanguage::Java => java(request),
        SampleLanguage::Go => go(request),
    }
}

/// `{indent}'name': 'value'` lines joined by `,\n`, with the given separator.
fn header_entries(request: &SampleRequest<'_>, indent: &str, separator: &str) -> String {
    request
        .headers()
        .iter()
        .map(|(name, value)| format!("{}'{}'{}'{}'", indent, name, separator, value))
        .collect::<Vec<_>>()
        .join(",\n")
}

fn shell(request: &SampleRequest<'_>) -> String {
    let mut out = format!("curl -X {} {}", request.method, request.url);
    for (name, value) in request.headers() {
        out.push_str(&format!(" \\\n  -H '{}: {}'", name, value));
    }
    out
}

fn http(request: &SampleRequest<'_>) -> String {
    let mut out = format!("{} {} HTTP/1.1", request.method, request.url);
    let host = Url::parse(request.url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string));
    if let Some(host) = host {
        out.push_str(&format!("\nHost: {}", host));
    }
    for (name, value) in request.headers() {
        out.push_str(&format!("\n{}: {}", name, value));
    }
    out
}

fn javascript(request: &SampleRequest<'_>) -> String {
    let has_headers = !request.headers().is_empty();
    let mut out = String::new();
    if has_headers {
        out.push_str(&format!(
            "const headers = {{\n{}\n}};\n\n",
            header_entries(request, "  ", ": ")
        ));
    }

    out.push_str(&format!("fetch('{}', {{\n", request.url));
    out.push_str(&format!("  method: '{}'", request.method));
    if has_headers {
        out.push_str(",\n  headers: headers");
    }
    out.push_str("\n})\n.then(function(res) {\n  return res.json();\n}).then(function(body) {\n  console.log(body);\n});");
    out
}

fn ruby(request: &SampleRequest<'_>) -> String {
    let has_headers = !request.headers().is_empty();
    let mut out = String::from("require 'rest-client'\nrequire 'json'\n");
    if has_headers {
        out.push_str(&format!(
            "\nheaders = {{\n{}\n}}\n",
            header_entries(request, "  ", " => ")
        ));
    }

    out.push_str(&format!(
        "\nresult = RestClient.{} '{}'",
        request.method.to_ascii_lowercase(),
        request.url
    ));
    if has_headers {
        out.push_str(", headers: headers");
    }
    out.push_str("\n\np JSON.parse(result)");
    out
}

fn python(request: &SampleRequest<'_>) -> String {
    let has_headers = !request.headers().is_empty();
    let mut out = String::from("import requests\n");
    if has_headers {
        out.push_str(&format!(
            "headers = {{\n{}\n}}\n",
            header_entries(request, "  ", ": ")
        ));
    }

    out.push_str(&format!(
        "\nr = requests.{}('{}'",
        request.method.to_ascii_lowercase(),
        request.url
    ));
    if has_headers {
        out.push_str(", headers = headers");
    }
    out.push_str(")\n\nprint(r.json())");
    out
}

fn java(request: &SampleRequest<'_>) -> String {
    let mut out = format!("URL obj = new URL(\"{}\");\n", request.url);
    out.push_str("HttpURLConnection con = (HttpURLConnection) obj.openConnection();\n");
    out.push_str(&format!("con.setRequestMethod(\"{}\");\n", request.method));
    for (name, value) in request.headers() {
        out.push_str(&format!("con.setRequestProperty(\"{}\", \"{}\");\n", name, value));
    }
    out.push_str(
        "int responseCode = con.getResponseCode();\n\
         BufferedReader in = new BufferedReader(\n    new InputStreamReader(con.getInputStream()));\n\
         String inputLine;\n\
         StringBuffer response = new StringBuffer();\n\
         while ((inputLine = in.readLine()) != null) {\n    response.append(inputLine);\n}\n\
         in.close();\n\
         System.out.println(response.toString());",
    );
    out
}

fn go(request: &SampleRequest<'_>) -> String {
    let mut out = String::from("package main\n\nimport (\n    \"bytes\"\n    \"net/http\"\n)\n\nfunc main() {\n\n");
    let headers = request.headers();
    if !headers.is_empty() {
        out.push_str("    headers := map[string][]string{\n");
        for (name, value) in &headers {
            out.push_str(&format!("        \"{}\": []string{{\"{}\"}},\n", name, value));
        }
        out.push_str("    }\n\n");
    }

    out.push_str("    data := bytes.NewBuffer([]byte{jsonReq})\n");
    out.push_str(&format!(
        "    req, err := http.NewRequest(\"{}\", \"{}\", data)\n",
        request.method, request.url
    ));
    if !headers.is_empty() {
        out.push_str("    req.Header = headers\n");
    }
    out.push_str("\n    client := &http.Client{}\n    resp, err := client.Do(req)\n    // ...\n}");
    out
}
