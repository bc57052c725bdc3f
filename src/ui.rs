//! The embedded single-page form. Option lists are baked into the page as
//! JSON at startup so the page works as a single-file deploy.

use crate::options::{LengthBucket, OutputFormat};
use crate::roles::{Role, Tone};

/// Render the index page with the option lists substituted in.
pub fn index_page() -> String {
    INDEX_HTML
        .replace("%ROLES_JSON%", &names_json(Role::ALL.iter().map(Role::name)))
        .replace("%TONES_JSON%", &names_json(Tone::ALL.iter().map(Tone::name)))
        .replace(
            "%FORMATS_JSON%",
            &names_json(OutputFormat::ALL.iter().map(OutputFormat::name)),
        )
        .replace(
            "%LENGTHS_JSON%",
            &names_json(LengthBucket::ALL.iter().map(LengthBucket::name)),
        )
}

fn names_json<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Musebot</title>
  <style>
    :root { --bg:#0b0d10; --panel:#12161c; --soft:#1b212a; --text:#e7ecf3; --muted:#a9b7c6; }
    body { margin:0; font-family:system-ui, sans-serif; background:var(--bg); color:var(--text); }
    header { padding:20px 24px; border-bottom:1px solid #202833; background:var(--panel); }
    h1 { margin:0; font-size:20px; letter-spacing:.3px; }
    .wrap { display:grid; grid-template-columns: 360px 1fr; gap:16px; padding:16px; }
    .card { background:var(--panel); border:1px solid #202833; border-radius:14px; padding:14px; }
    label { display:block; font-size:12px; color:var(--muted); margin-top:8px; }
    select, input[type=range], textarea { width:100%; background:var(--soft); color:var(--text); border:1px solid #263142; border-radius:10px; padding:10px; outline:none; }
    textarea { min-height:120px; resize:vertical; }
    .row { display:grid; grid-template-columns: 1fr 1fr; gap:8px; }
    .btn { margin-top:12px; padding:12px 14px; background:#2b82f6; border:none; color:#fff; border-radius:10px; cursor:pointer; font-weight:600; }
    .btn:disabled { opacity:.6; cursor:not-allowed; }
    .chat { display:flex; flex-direction:column; gap:12px; }
    .bubble { background:var(--panel); border:1px solid #202833; border-radius:12px; padding:12px; white-space:pre-wrap; }
    .bubble.user { background:#17202b; }
    .meta { font-size:12px; color:var(--muted); margin-bottom:6px; }
    .opts { display:grid; grid-template-columns: 1fr 1fr; gap:8px; margin-top:8px; }
    .check { display:flex; gap:8px; align-items:center; font-size:13px; color:var(--muted); }
    footer { text-align:center; color:#8190a6; font-size:12px; padding:12px; }
  </style>
</head>
<body>
  <header><h1>Musebot</h1></header>
  <div class="wrap">
    <div class="card">
      <div class="row">
        <div>
          <label>Choose a role</label>
          <select id="role"></select>
        </div>
        <div>
          <label>Tone</label>
          <select id="tone"></select>
        </div>
      </div>

      <div class="row" style="margin-top:8px;">
        <div>
          <label>Format</label>
          <select id="format"></select>
        </div>
        <div>
          <label>Response length</label>
          <select id="length"></select>
        </div>
      </div>

      <label style="margin-top:10px;">Creativity: <span id="cval">0.5</span></label>
      <input id="creativity" type="range" min="0" max="1" step="0.05" value="0.5" />

      <label style="margin-top:10px;">Your prompt</label>
      <textarea id="prompt" placeholder="Describe what you want..."></textarea>

      <div class="opts">
        <div class="check"><input type="checkbox" id="title"/><span>Include title</span></div>
        <div class="check"><input type="checkbox" id="tldr"/><span>Include TL;DR</span></div>
        <div class="check"><input type="checkbox" id="ideas3"/><span>Add 3 ideas</span></div>
        <div class="check"><input type="checkbox" id="next_prompt"/><span>Suggest next prompt</span></div>
        <div class="check"><input type="checkbox" id="no_emojis"/><span>No emojis</span></div>
        <div class="check"><input type="checkbox" id="force_bullets"/><span>Force bullets</span></div>
        <div class="check"><input type="checkbox" id="quote"/><span>Include a quote</span></div>
        <div class="check"><input type="checkbox" id="cta"/><span>Include a CTA</span></div>
      </div>

      <button class="btn" id="send">Generate</button>
    </div>

    <div class="card">
      <div class="chat" id="chat"></div>
    </div>
  </div>
  <footer>No external AI calls. Fully local, deterministic-ish output.</footer>

  <script>
    const ROLES = %ROLES_JSON%;
    const TONES = %TONES_JSON%;
    const FORMATS = %FORMATS_JSON%;
    const LENGTHS = %LENGTHS_JSON%;

    const chatEl = document.getElementById('chat');
    const cRange = document.getElementById('creativity');
    const cVal = document.getElementById('cval');

    function fill(id, values) {
      const sel = document.getElementById(id);
      values.forEach(v => {
        const o = document.createElement('option');
        o.textContent = v;
        sel.appendChild(o);
      });
    }
    fill('role', ROLES);
    fill('tone', TONES);
    fill('format', FORMATS);
    fill('length', LENGTHS);
    document.getElementById('length').value = 'Medium';

    cRange.addEventListener('input', () => cVal.textContent = cRange.value);

    function addBubble(text, who) {
      const wrap = document.createElement('div');
      wrap.className = 'bubble' + (who === 'user' ? ' user' : '');
      const meta = document.createElement('div');
      meta.className = 'meta';
      meta.textContent = who === 'user' ? 'You' : 'Bot';
      const pre = document.createElement('pre');
      pre.style.whiteSpace = 'pre-wrap';
      pre.textContent = text;
      wrap.appendChild(meta);
      wrap.appendChild(pre);
      chatEl.appendChild(wrap);
      chatEl.scrollTop = chatEl.scrollHeight;
    }

    document.getElementById('send').addEventListener('click', async () => {
      const prompt = document.getElementById('prompt').value.trim();
      if (!prompt) { return; }
      addBubble(prompt, 'user');
      const btn = document.getElementById('send');
      btn.disabled = true;
      btn.textContent = 'Generating...';
      try {
        const payload = {
          role: document.getElementById('role').value,
          tone: document.getElementById('tone').value,
          format: document.getElementById('format').value,
          length: document.getElementById('length').value,
          creativity: parseFloat(cRange.value),
          text: prompt,
          extras: {
            title: document.getElementById('title').checked,
            tldr: document.getElementById('tldr').checked,
            ideas3: document.getElementById('ideas3').checked,
            next_prompt: document.getElementById('next_prompt').checked,
            no_emojis: document.getElementById('no_emojis').checked,
            force_bullets: document.getElementById('force_bullets').checked,
            quote: document.getElementById('quote').checked,
            cta: document.getElementById('cta').checked
          }
        };
        const res = await fetch('/chat', { method: 'POST', headers: { 'Content-Type': 'application/json' }, body: JSON.stringify(payload) });
        const data = await res.json();
        addBubble(data.reply, 'bot');
      } catch (err) {
        addBubble('Something went wrong, but the app itself is running. Try again.', 'bot');
        console.error(err);
      } finally {
        btn.disabled = false;
        btn.textContent = 'Generate';
      }
    });
  </script>
</body>
</html>
"##;
