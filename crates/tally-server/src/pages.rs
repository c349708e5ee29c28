//! Static informational page served at `/`.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <title>Tally - hit counter</title>
    <style>
      body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', monospace;
        padding: 40px;
        background: #0d1117;
        color: #c9d1d9;
        line-height: 1.6;
      }
      h1 { color: #58a6ff; }
      h2 { color: #79c0ff; margin-top: 30px; }
      code {
        background: #161b22;
        padding: 2px 6px;
        border-radius: 3px;
        color: #79c0ff;
      }
      pre {
        background: #161b22;
        padding: 16px;
        border-radius: 6px;
        border: 1px solid #30363d;
        overflow-x: auto;
      }
      a { color: #58a6ff; text-decoration: none; }
      li { margin: 8px 0; }
    </style>
  </head>
  <body>
    <h1>Tally</h1>
    <p>A visitor counter rendered as an SVG digit strip. Every request to the
    image endpoint increments the counter for its key.</p>

    <h2>Usage</h2>
    <pre><code>/YOUR_KEY/count.svg</code></pre>

    <p>With custom colors (the <code>#</code> is optional):</p>
    <pre><code>/YOUR_KEY/count.svg?background=222223&amp;text=feee68</code></pre>

    <h2>Query parameters</h2>
    <ul>
      <li><code>background</code> - cell background (3- or 6-digit hex)</li>
      <li><code>text</code> - digit color (3- or 6-digit hex)</li>
    </ul>
    <p>Invalid colors fall back to the defaults (black and green).</p>

    <h2>Other endpoints</h2>
    <ul>
      <li><code>GET /YOUR_KEY/</code> - current count as JSON, without incrementing</li>
      <li><a href="/health">GET /health</a> - health check</li>
      <li><a href="/metrics">GET /metrics</a> - service counters</li>
    </ul>

    <h2>In a README</h2>
    <pre><code>&lt;img src="https://your.host/YOUR_KEY/count.svg" alt="Visitor count" /&gt;</code></pre>
  </body>
</html>
"#;
