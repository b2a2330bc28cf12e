use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(method: &str, path: &str, body: &str) -> HttpResponse {
    match (method, path) {
        ("GET", "/") => html_ok(index_html()),
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("POST", "/api/simulate") => match api::simulate_payload(body) {
            Ok(payload) => json_ok(payload),
            Err(api::SimulateError::Parse(err)) => {
                error_response(400, "Bad Request", &format!("Invalid request body: {err}"))
            }
            Err(api::SimulateError::Validation(validation)) => {
                validation_error_response(400, "Bad Request", validation)
            }
        },
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn json_ok(body: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "application/json",
        body,
    }
}

fn html_ok(body: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "text/html; charset=utf-8",
        body,
    }
}

fn validation_error_response(
    status_code: u16,
    status_text: &'static str,
    payload: api::ValidationErrorResponse,
) -> HttpResponse {
    let fallback =
        "{\n  \"status\": \"error\",\n  \"message\": \"Validation failed\"\n}".to_string();

    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: serde_json::to_string_pretty(&payload).unwrap_or(fallback),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Yogg console</title>
  <style>
    :root { --ink: #e6e1d6; --panel: #201a2b; --accent: #8c6ad4; }
    body { background: #141020; color: var(--ink); font: 15px/1.5 system-ui, sans-serif; margin: 0 auto; max-width: 680px; padding: 32px 16px; }
    h1 { font-weight: 600; letter-spacing: 1px; }
    section { background: var(--panel); border-left: 3px solid var(--accent); padding: 16px; margin: 16px 0; }
    label { display: block; margin-top: 10px; color: #b9b0cf; }
    input { width: 100%; margin-top: 4px; padding: 7px; border: 1px solid #3a3150; background: #181225; color: var(--ink); box-sizing: border-box; }
    button { margin-top: 14px; margin-right: 8px; padding: 7px 16px; border: 0; background: var(--accent); color: #14101f; cursor: pointer; }
    pre { background: #0c0914; padding: 14px; min-height: 140px; overflow: auto; white-space: pre-wrap; }
    small { color: #8d84a6; }
  </style>
</head>
<body>
  <h1>Yogg</h1>
  <p>Clearance odds for a board under induced insanity.</p>

  <section>
    <label for="board">Board, one minion per <code>attack health [d] [p]</code> group</label>
    <input id="board" value="4 2 d 2 2 p 3 3" />
    <small>d = divine shield, p = poison. Negative attack heals its target.</small>
    <label for="trials">Trials (1 to 10,000,000)</label>
    <input id="trials" type="number" min="1" max="10000000" value="100000" />
    <label for="seed">Seed, blank for a random run</label>
    <input id="seed" type="number" min="0" />
    <div>
      <button id="run">Simulate</button>
      <button id="health">Health check</button>
    </div>
  </section>

  <pre id="out">Waiting for a board.</pre>

  <script>
    const out = document.getElementById('out');

    function parseBoard(text) {
      const tokens = text.trim().split(/\s+/).filter(Boolean);
      const minions = [];
      let i = 0;
      while (i < tokens.length) {
        const attack = Number(tokens[i]);
        const health = Number(tokens[i + 1]);
        if (!Number.isInteger(attack) || !Number.isInteger(health)) return null;
        const minion = { attack, health, divine_shield: false, poison: false };
        i += 2;
        while (tokens[i] === 'd' || tokens[i] === 'p') {
          if (tokens[i] === 'd') minion.divine_shield = true;
          else minion.poison = true;
          i += 1;
        }
        minions.push(minion);
      }
      return minions;
    }

    async function call(path, init) {
      out.textContent = 'Running...';
      const response = await fetch(path, init);
      out.textContent = 'HTTP ' + response.status + '\n' + await response.text();
    }

    document.getElementById('health').addEventListener('click', () => call('/api/health'));

    document.getElementById('run').addEventListener('click', () => {
      const minions = parseBoard(document.getElementById('board').value);
      if (!minions || minions.length === 0) {
        out.textContent = 'Could not read the board. Expected pairs like "4 2 d 2 2".';
        return;
      }
      const payload = { minions, trials: Number(document.getElementById('trials').value) || 100000 };
      const seed = document.getElementById('seed').value;
      if (seed !== '') payload.seed = Number(seed);
      call('/api/simulate', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload),
      });
    });
  </script>
</body>
</html>
"#
    .to_string()
}
