pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Cure Your Boredom!</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #6ee7b7;
      --bg-2: #3b82f6;
      --bg-3: #9333ea;
      --ink: #1f2430;
      --solo: #15803d;
      --group: #16a34a;
      --joke: #2563eb;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(30, 41, 59, 0.25);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(120deg, var(--bg-1), var(--bg-2) 50%, var(--bg-3));
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: flex;
      flex-direction: column;
      align-items: center;
      padding: 40px 18px 64px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2.2rem, 5vw, 3.4rem);
      color: white;
      text-shadow: 0 4px 18px rgba(0, 0, 0, 0.25);
      margin: 0 0 36px;
      text-align: center;
    }

    .widget {
      width: min(900px, 100%);
      display: grid;
      gap: 28px;
    }

    .chart-card,
    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 26px;
    }

    .chart-card h2 {
      margin: 0 0 14px;
      font-size: 1.3rem;
    }

    #chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-grid {
      stroke: rgba(31, 36, 48, 0.12);
    }

    .chart-axis {
      stroke: rgba(31, 36, 48, 0.35);
    }

    .chart-label {
      fill: #4b5263;
      font-size: 12px;
    }

    .chart-value {
      fill: #1f2430;
      font-size: 12px;
      font-weight: 600;
    }

    .card h2 {
      margin: 0 0 14px;
      font-size: 1.6rem;
    }

    .card.solo h2 { color: var(--solo); }
    .card.group h2 { color: var(--group); }
    .card.joke h2 { color: var(--joke); }

    .detail p {
      margin: 6px 0;
      line-height: 1.5;
    }

    .detail .field {
      font-weight: 600;
    }

    .detail a {
      color: var(--joke);
    }

    .placeholder {
      color: #6b7280;
      font-style: italic;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 12px;
      margin-top: 18px;
      width: 100%;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      color: white;
      cursor: pointer;
      transition: transform 150ms ease, filter 150ms ease;
    }

    button:hover {
      filter: brightness(1.08);
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      filter: grayscale(0.4);
      cursor: wait;
    }

    .card.solo button { background: var(--solo); }
    .card.group button { background: var(--group); }
    .card.joke button { background: var(--joke); }

    .status {
      min-height: 1.3em;
      margin-top: 4px;
      font-size: 0.95rem;
      color: rgba(255, 255, 255, 0.9);
      text-align: center;
    }

    .status[data-type="error"] {
      color: #fecaca;
      font-weight: 600;
    }

    @media (max-width: 600px) {
      .card,
      .chart-card {
        padding: 20px;
      }
    }
  </style>
</head>
<body>
  <h1>Cure Your Boredom!</h1>

  <main class="widget">
    <section class="chart-card">
      <h2>Number of Activities by Type</h2>
      <svg id="chart" viewBox="0 0 640 280" role="img" aria-label="Activities by type"></svg>
    </section>

    <section class="card solo">
      <h2>Solo Activity</h2>
      <div class="detail" id="solo-detail"></div>
      <button id="solo-btn" type="button">Generate Solo Activity</button>
    </section>

    <section class="card group">
      <h2>Group Activity</h2>
      <div class="detail" id="group-detail"></div>
      <button id="group-btn" type="button">Generate Group Activity</button>
    </section>

    <section class="card joke">
      <h2>Chuck Norris Joke</h2>
      <div class="detail" id="joke-detail"></div>
      <button id="joke-btn" type="button">Tell Me a Joke</button>
    </section>
  </main>

  <div class="status" id="status"></div>

  <script>
    const chartEl = document.getElementById('chart');
    const soloDetail = document.getElementById('solo-detail');
    const groupDetail = document.getElementById('group-detail');
    const jokeDetail = document.getElementById('joke-detail');
    const statusEl = document.getElementById('status');

    const palette = ['#f87171', '#60a5fa', '#fbbf24', '#34d399', '#a78bfa', '#fb923c'];

    const esc = (text) =>
      String(text)
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;');

    const setStatus = (message, type) => {
      statusEl.textContent = message || '';
      statusEl.dataset.type = type || '';
    };

    const renderActivity = (el, details) => {
      if (!details) {
        el.innerHTML = '<p class="placeholder">Press the button to get a suggestion.</p>';
        return;
      }

      let html = `<p><span class="field">Activity:</span> ${esc(details.activity)}</p>`;
      if (details.type !== undefined) {
        html += `<p><span class="field">Type:</span> ${esc(details.type)}</p>`;
      }
      if (details.participants !== undefined) {
        html += `<p><span class="field">Participants:</span> ${esc(details.participants)}</p>`;
      }
      if (details.link) {
        html += `<p><span class="field">Learn More:</span> <a href="${esc(details.link)}" target="_blank" rel="noopener noreferrer">Click Here</a></p>`;
      }
      el.innerHTML = html;
    };

    const renderJoke = (text) => {
      jokeDetail.innerHTML = `<p>${esc(text)}</p>`;
    };

    const formatTick = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const renderBarChart = (labels, counts) => {
      if (!labels.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">Fetch an activity to start the chart.</text>';
        return;
      }

      const width = 640;
      const height = 280;
      const paddingX = 48;
      const paddingY = 38;
      const top = 22;

      const max = Math.max(...counts);
      const innerHeight = height - top - paddingY;
      const band = (width - paddingX * 2) / labels.length;
      const barWidth = Math.min(band * 0.6, 70);
      const y = (value) => height - paddingY - (value / max) * innerHeight;

      const ticks = Math.min(max, 4);
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${formatTick(value)}</text>`;
      }

      let bars = '';
      labels.forEach((label, index) => {
        const count = counts[index];
        const x = paddingX + band * index + (band - barWidth) / 2;
        const barTop = y(count);
        const color = palette[index % palette.length];
        bars += `<rect x="${x.toFixed(2)}" y="${barTop.toFixed(2)}" width="${barWidth.toFixed(2)}" height="${(height - paddingY - barTop).toFixed(2)}" rx="6" fill="${color}" />`;
        bars += `<text class="chart-value" x="${(x + barWidth / 2).toFixed(2)}" y="${(barTop - 8).toFixed(2)}" text-anchor="middle">${count}</text>`;
        bars += `<text class="chart-label" x="${(x + barWidth / 2).toFixed(2)}" y="${height - paddingY + 18}" text-anchor="middle">${esc(label)}</text>`;
      });

      const axis = `<line class="chart-axis" x1="${paddingX}" y1="${height - paddingY}" x2="${width - paddingX}" y2="${height - paddingY}" />`;

      chartEl.innerHTML = `${grid}${axis}${bars}`;
    };

    const loadChart = async () => {
      const res = await fetch('/api/chart');
      if (!res.ok) {
        throw new Error('Unable to load chart data');
      }
      const series = await res.json();
      renderBarChart(series.labels, series.counts);
    };

    const loadWidget = async () => {
      const res = await fetch('/api/widget');
      if (!res.ok) {
        throw new Error('Unable to load widget state');
      }
      const snapshot = await res.json();
      renderActivity(soloDetail, snapshot.solo);
      renderActivity(groupDetail, snapshot.group);
      renderJoke(snapshot.joke);
    };

    const trigger = async (button, url, apply) => {
      button.disabled = true;
      setStatus('Fetching...', '');
      try {
        const res = await fetch(url, { method: 'POST' });
        if (!res.ok) {
          throw new Error('Request failed');
        }
        apply(await res.json());
        setStatus('', '');
      } catch (err) {
        setStatus(err.message, 'error');
      } finally {
        button.disabled = false;
      }
    };

    const soloBtn = document.getElementById('solo-btn');
    const groupBtn = document.getElementById('group-btn');
    const jokeBtn = document.getElementById('joke-btn');

    soloBtn.addEventListener('click', () => {
      trigger(soloBtn, '/api/activity/solo', (details) => {
        renderActivity(soloDetail, details);
        loadChart().catch((err) => setStatus(err.message, 'error'));
      });
    });

    groupBtn.addEventListener('click', () => {
      trigger(groupBtn, '/api/activity/group', (details) => {
        renderActivity(groupDetail, details);
        loadChart().catch((err) => setStatus(err.message, 'error'));
      });
    });

    jokeBtn.addEventListener('click', () => {
      trigger(jokeBtn, '/api/joke', (joke) => renderJoke(joke.value));
    });

    Promise.all([loadWidget(), loadChart()]).catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
