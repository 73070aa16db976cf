//! Page templates.
//!
//! Names end in `.html` so minijinja auto-escapes interpolated values.

pub(crate) const LOADING: (&str, &str) = (
    "loading.html",
    r#"<div class="loading">
  <p>Loading...</p>
</div>
"#,
);

pub(crate) const HOME: (&str, &str) = (
    "home.html",
    r#"<style>
{{ css | safe }}.game-item:hover { background: {{ "list-item-hover-bg" | css_var }} !important; }
</style>
<div class="page {{ theme }}-theme-bg">
  <header class="logo">Go Spill</header>
  <main>
    <div class="slogan">
      <p>Sharpen your mind, the board is set!</p>
      <p>Are you ready to conquer the board?</p>
    </div>
    <div class="actions">
      <button class="button button-primary" style="background: {{ "button-primary-bg" | css_var }}; color: {{ "button-primary-text" | css_var }}; border: 3px solid {{ "button-primary-border" | css_var }}; box-shadow: 0px 6px 0px {{ "button-primary-border" | css_var }}, 2px 8px 10px {{ "button-primary-shadow-color" | css_var }}">Start Game</button>
      <a class="button button-secondary" href="/spill-mot-ai" style="background: {{ "button-secondary-bg" | css_var }}; color: {{ "button-secondary-text" | css_var }}; border: 3px solid {{ "button-secondary-border" | css_var }}; box-shadow: 0px 6px 0px {{ "button-secondary-border" | css_var }}, 2px 8px 10px {{ "button-secondary-shadow-color" | css_var }}">Play against AI</a>
    </div>
    <section class="games">
      <h2>Pågående Spill</h2>
{%- if games %}
      <ul>
{%- for game in games %}
        <li class="game-item" style="background: {{ "list-item-bg" | css_var }}; color: {{ "list-item-text" | css_var }}; border: 1px solid {{ "list-item-border-color" | css_var }}">
          <a href="{{ game.path }}">
            <h3>Spill ID: {{ game.id | short_id }}</h3>
            <p>({{ game.player_count }}/{{ max_players }} spillere) - Status: {{ game.status }}</p>
            <small>Opprettet: for {{ game.minutes }} min siden</small>
          </a>
        </li>
{%- endfor %}
      </ul>
{%- else %}
      <p>Ingen aktive spill for øyeblikket.</p>
{%- endif %}
    </section>
  </main>
  <footer>
    <button class="theme-toggle">Bytt til {% if theme == "light" %}Mørkt{% else %}Lyst{% endif %} Tema</button>
  </footer>
</div>
"#,
);

pub(crate) const GAME: (&str, &str) = (
    "game.html",
    r#"<style>
{{ css | safe }}</style>
<div class="page {{ theme }}-theme-content-bg">
  <header class="logo">Go Spill</header>
  <main>
    <h1>Spill ID: {{ game_id | short_id }}</h1>
    <div class="board" data-size="{{ board_size }}"></div>
  </main>
  <footer>
    <button class="theme-toggle">Bytt til {% if theme == "light" %}Mørkt{% else %}Lyst{% endif %} Tema</button>
  </footer>
</div>
"#,
);
