//! Handlebars sources for the HTML pages.

pub const STYLES: &str = r#"<style>
    body { font-family: Arial, sans-serif; background: #181a20; color: #eee; margin: 0; padding: 0; }
    .container { max-width: 900px; margin: 40px auto; background: #23262f; padding: 2em; border-radius: 10px; box-shadow: 0 2px 8px #0008; }
    .narrow { max-width: 420px; }
    h1, h2 { text-align: center; }
    h3 { margin-top: 1.5em; }
    table { width: 100%; border-collapse: collapse; margin-top: 0.5em; }
    th, td { padding: 0.6em; text-align: center; border-bottom: 1px solid #333; }
    th { background: #2d303a; }
    tr.due td { color: #22c55e; }
    a { color: #3b82f6; text-decoration: none; }
    a.button, button { background: #3b82f6; color: #fff; padding: 0.5em 1em; border: none; border-radius: 5px; cursor: pointer; font-size: 1em; }
    a.button:hover, button:hover { background: #2563eb; }
    form { display: flex; flex-direction: column; gap: 0.8em; }
    label { font-weight: bold; }
    input { padding: 0.5em; border-radius: 5px; border: none; }
    .muted { color: #999; font-size: 0.9em; }
    .userbar { text-align: right; }
    .flash { padding: 1em; margin-bottom: 1em; border-radius: 5px; }
    .flash-success { background: #22c55e; color: #fff; }
    .flash-danger { background: #ef4444; color: #fff; }
    .flash-info { background: #3b82f6; color: #fff; }
</style>"#;

pub const FLASH: &str = r#"{{#if flash}}<div class="flash flash-{{flash.category}}">{{flash.message}}</div>{{/if}}"#;

pub const USERBAR: &str = r#"<div class="userbar">
    {{#if user}}Logged in as <strong>{{user}}</strong> &middot; <a href="/logout">Log out</a>{{else}}<a href="/login">Log in</a>{{/if}}
</div>"#;

pub const BOSS_TABLE: &str = r#"<table>
    <tr>
        <th>Boss</th>
        <th>Last Kill</th>
        <th>Recorded By</th>
        <th>Next Spawn</th>
        <th>Window End</th>
        <th>Respawn In</th>
        <th>Window Left</th>
        <th>Action</th>
    </tr>
    {{#each rows}}
    <tr class="{{status}}" data-respawn="{{respawn_secs}}" data-window="{{window_secs}}">
        <td>{{name}}</td>
        <td>{{last_kill}}</td>
        <td>{{recorded_by}}</td>
        <td>{{respawn_at}}</td>
        <td>{{window_end}}</td>
        <td class="respawn-left">{{respawn_left}}</td>
        <td class="window-left">{{window_left}}</td>
        <td><a class="button" href="{{reset_url}}">Reset</a></td>
    </tr>
    {{/each}}
</table>"#;

/// Ticks every row once per second with no server calls. Same rule as
/// `respawn_core::countdown::Countdown::tick`.
pub const COUNTDOWN_SCRIPT: &str = r#"<script>
(function () {
    function pad(n) { return n < 10 ? "0" + n : String(n); }
    function fmt(s) {
        if (s === null) { return "N/A"; }
        if (s <= 0) { return "Ready!"; }
        return pad(Math.floor(s / 3600)) + ":" + pad(Math.floor((s % 3600) / 60)) + ":" + pad(s % 60);
    }
    function num(v) { return v === null || v === "" ? null : parseInt(v, 10); }

    var timers = [];
    document.querySelectorAll("tr[data-respawn]").forEach(function (row) {
        var respawn = num(row.getAttribute("data-respawn"));
        if (respawn === null) { return; }
        timers.push({
            respawn: respawn,
            window: num(row.getAttribute("data-window")),
            respawnCell: row.querySelector(".respawn-left"),
            windowCell: row.querySelector(".window-left")
        });
    });

    setInterval(function () {
        timers.forEach(function (t) {
            if (t.respawn > 0) {
                t.respawn -= 1;
                if (t.window !== null) { t.window -= 1; }
            } else if (t.window !== null && t.window > 0) {
                t.window -= 1;
            }
            t.respawnCell.textContent = fmt(t.respawn);
            t.windowCell.textContent = fmt(t.window);
        });
    }, 1000);
})();
</script>"#;

pub const DASHBOARD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
    {{> styles}}
</head>
<body>
    <div class="container">
        {{> userbar}}
        <h1>{{title}}</h1>
        {{> flash}}
        <h3>Due</h3>
        {{#if due}}
            {{> boss_table rows=due}}
        {{else}}
            <p class="muted">No bosses are up right now.</p>
        {{/if}}
        <h3>Upcoming</h3>
        {{#if upcoming}}
            {{> boss_table rows=upcoming}}
        {{else}}
            <p class="muted">Every boss is due.</p>
        {{/if}}
        <p class="muted">Server time {{generated_at}}. Countdowns update locally; reload to resync.</p>
    </div>
    {{> countdown_script}}
</body>
</html>
"#;

pub const LOGIN: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Log in</title>
    {{> styles}}
</head>
<body>
    <div class="container narrow">
        <h2>Log in</h2>
        {{> flash}}
        <form method="post" action="/login">
            <label for="username">Username:</label>
            <input type="text" name="username" id="username" value="{{username}}" required>
            <label for="password">Password:</label>
            <input type="password" name="password" id="password" required>
            <button type="submit">Log in</button>
        </form>
        <p><a href="/">Back to Timers</a></p>
    </div>
</body>
</html>
"#;

pub const RESET: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Reset {{boss.name}} Timer</title>
    {{> styles}}
</head>
<body>
    <div class="container narrow">
        {{> userbar}}
        <h2>Reset {{boss.name}} Timer</h2>
        {{> flash}}
        <p class="muted">Respawn {{boss.respawn_minutes}} min, window {{boss.window_minutes}} min. Last kill: {{last_kill}}.</p>
        {{#if user}}
        <form method="post" action="{{action}}">
            <label for="kill_time">Kill Time (UTC):</label>
            <input type="datetime-local" name="kill_time" id="kill_time" max="{{now}}">
            <span class="muted">Leave blank to record the kill at the current server time ({{now}} UTC).</span>
            <button type="submit">Reset Timer</button>
        </form>
        {{else}}
        <p><a class="button" href="/login">Log in to reset</a></p>
        {{/if}}
        <p><a href="/">Back to Timers</a></p>
    </div>
</body>
</html>
"#;
