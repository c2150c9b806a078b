//! Embedded page templates.
//!
//! The recipe page is what `sync` later reads back: the `recipe-status` and
//! `recipe-category` meta tags, the `difficulty-*` class, and the
//! "Prep time" / "Cook time" / "Serves" labels must stay in step with
//! `index::extract`.

use crate::error::Result;

pub const RECIPE_TEMPLATE: &str = "recipe.html";
pub const FORM_TEMPLATE: &str = "form.html";

pub const RECIPE_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <!-- Recipe status: "live" lists the recipe in the index, anything else hides it -->
    <meta name="recipe-status" content="live">
    <meta name="description" content="{{ recipe.description }}">
{% for category in recipe.categories %}    <meta name="recipe-category" content="{{ category }}">
{% endfor %}    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ recipe.title }} - {{ site.name }}</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        body {
            font-family: 'Georgia', serif;
            background-color: #121212;
            background-image: linear-gradient(to bottom right, #121212, #1a1a2e);
            color: #f5f5f5;
            line-height: 1.6;
            min-height: 100vh;
        }
        .nav-link { color: #e0e0e0; font-weight: 500; padding: 6px 12px; border-radius: 4px; text-decoration: none; }
        .nav-link:hover { color: #ffffff; background-color: rgba(255, 255, 255, 0.05); }
        .content-card {
            background-color: #1e1e1e;
            border-radius: 12px;
            box-shadow: 0 8px 20px rgba(0, 0, 0, 0.2);
            border: 1px solid rgba(255, 255, 255, 0.05);
        }
        .section-title { display: inline-block; font-weight: 600; margin-bottom: 1.5rem; }
        .ingredient-item { display: flex; margin-bottom: 0.5rem; padding: 0.5rem; border-radius: 8px; }
        .ingredient-item:hover { background-color: #2a2a2a; }
        .ingredient-amount { font-weight: 600; color: #a0aec0; display: inline-block; min-width: 100px; }
        .instruction-step { margin-bottom: 1.5rem; padding-bottom: 1.5rem; border-bottom: 1px solid #333; }
        .instruction-step:last-child { border-bottom: none; }
        .difficulty-tag { font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 9999px; color: #e0e0e0; }
        .difficulty-easy { background-color: #2f855a; }
        .difficulty-medium { background-color: #dd6b20; }
        .difficulty-hard { background-color: #c53030; }
        .notes-section { background-color: #252525; border-radius: 8px; padding: 1.5rem; margin-top: 2rem; border-left: 4px solid #4a5568; }
        .ingredient-used { background-color: rgba(76, 81, 191, 0.2); border-radius: 4px; padding: 0 3px; font-weight: 600; }
        @media print {
            body { background: white; color: black; }
            .content-card { background: white; box-shadow: none; border: 1px solid #ddd; }
            .nav-link, header, footer { display: none; }
        }
    </style>
</head>
<body>
    <div class="container mx-auto px-4 sm:px-6 py-8 sm:py-12 max-w-4xl">
        <header class="mb-8 sm:mb-12 text-center">
            <nav class="flex flex-wrap justify-center space-x-2 sm:space-x-8 p-2 rounded-full bg-gray-800 bg-opacity-50 inline-flex">
                <a href="../index.html" class="nav-link">Home</a>
                <a href="../recipes.html" class="nav-link">Recipes</a>
            </nav>
        </header>

        <main>
            <section class="mb-12">
                <div class="content-card p-4 sm:p-8">
                    <div class="flex flex-col sm:flex-row justify-between items-start mb-6 sm:mb-8">
                        <h2 class="text-2xl sm:text-3xl font-semibold mb-3 sm:mb-0">{{ recipe.title }}</h2>
                        <div class="flex items-center space-x-3">
                            <span class="difficulty-tag {{ difficulty_class }}">{{ recipe.difficulty }}</span>
                            <button onclick="window.print()" class="text-gray-400 hover:text-white">Print</button>
                        </div>
                    </div>

                    <div class="mb-8">
                        <p class="text-gray-300 mb-4">{{ recipe.description }}</p>
                        <div class="flex flex-wrap gap-4 text-gray-300">
                            <span><strong>Prep time:</strong> {{ recipe.prep_time }}</span>
                            <span><strong>Cook time:</strong> {{ recipe.cook_time }}</span>
                            <span><strong>Serves:</strong> {{ recipe.servings }}</span>
                        </div>
                    </div>

                    <div class="mb-8">
                        <h3 class="text-xl sm:text-2xl section-title">Ingredients</h3>
                        <div class="grid md:grid-cols-2 gap-4">
{{ ingredients_html | safe }}
                        </div>
                    </div>

                    <div class="mb-8">
                        <h3 class="text-xl sm:text-2xl section-title">Instructions</h3>
                        <ol class="list-none pl-0 space-y-6">
{{ directions_html | safe }}
                        </ol>
                    </div>
{% if recipe.notes %}
                    <div class="notes-section">
                        <h3 class="text-xl font-semibold mb-3">Notes</h3>
                        <p>{{ recipe.notes }}</p>
                    </div>
{% endif %}
                </div>
            </section>
        </main>

        <footer class="mt-12 mb-8 text-center text-gray-400">
            <p>&copy; {{ site.year }}{% if site.author %} {{ site.author }}{% endif %}</p>
        </footer>
    </div>
</body>
</html>
"##;

pub const FORM_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Recipe Generator - {{ site.name }}</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        body {
            font-family: 'Georgia', serif;
            background-color: #121212;
            background-image: linear-gradient(to bottom right, #121212, #1a1a2e);
            color: #f5f5f5;
            line-height: 1.6;
            min-height: 100vh;
        }
        .form-container { background-color: #1e1e1e; border-radius: 12px; border: 1px solid rgba(255, 255, 255, 0.05); }
        .form-group { margin-bottom: 1.5rem; }
        .form-label { display: block; margin-bottom: 0.5rem; font-weight: 600; color: #e0e0e0; }
        .form-input, .form-textarea, .form-select {
            width: 100%;
            padding: 0.75rem;
            background-color: #2a2a2a;
            border: 1px solid #444;
            border-radius: 8px;
            color: #f5f5f5;
        }
        .form-textarea { resize: vertical; min-height: 120px; }
        .btn { color: white; padding: 0.75rem 2rem; border: none; border-radius: 8px; cursor: pointer; font-weight: 600; }
        .btn-primary { background: linear-gradient(90deg, #4a5568, #2d3748); }
        .btn-secondary { background: linear-gradient(90deg, #2f855a, #276749); }
        .flash-message { padding: 1rem; border-radius: 8px; margin-bottom: 1.5rem; }
        .flash-error { background-color: rgba(245, 101, 101, 0.1); border: 1px solid #f56565; color: #fc8181; }
        .help-text { font-size: 0.875rem; color: #a0aec0; margin-top: 0.25rem; }
        .two-column { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
        @media (max-width: 768px) { .two-column { grid-template-columns: 1fr; } }
    </style>
</head>
<body>
    <div class="container mx-auto px-6 py-12 max-w-4xl">
        <header class="mb-12 text-center">
            <h1 class="text-5xl font-bold mb-6">Recipe Generator</h1>
            <p class="text-gray-300 text-lg">Create recipe pages from a simple form</p>
        </header>

        <main>
            <div class="form-container p-8">
{% for message in messages %}
                <div class="flash-message flash-{{ message.category }}">{{ message.text }}</div>
{% endfor %}
                <form method="POST" action="/generate">
                    <h2 class="text-2xl font-bold mb-6 text-gray-200">Basic Information</h2>

                    <div class="form-group">
                        <label for="title" class="form-label">Recipe Title *</label>
                        <input type="text" id="title" name="title" class="form-input" required
                               placeholder="e.g., Chocolate Chip Cookies" value="{{ form.title }}">
                    </div>

                    <div class="form-group">
                        <label for="description" class="form-label">Description *</label>
                        <textarea id="description" name="description" class="form-textarea" required
                                  placeholder="Brief description of your recipe...">{{ form.description }}</textarea>
                        <div class="help-text">This will appear in search results and recipe cards</div>
                    </div>

                    <div class="two-column">
                        <div class="form-group">
                            <label for="difficulty" class="form-label">Difficulty *</label>
                            <select id="difficulty" name="difficulty" class="form-select" required>
{% for level in difficulties %}                                <option value="{{ level }}"{% if form.difficulty == level %} selected{% endif %}>{{ level | capitalize }}</option>
{% endfor %}                            </select>
                        </div>
                        <div class="form-group">
                            <label for="servings" class="form-label">Servings *</label>
                            <input type="number" id="servings" name="servings" class="form-input" required
                                   min="1" placeholder="4" value="{{ form.servings }}">
                        </div>
                    </div>

                    <div class="two-column">
                        <div class="form-group">
                            <label for="prep_time" class="form-label">Prep Time *</label>
                            <input type="text" id="prep_time" name="prep_time" class="form-input" required
                                   placeholder="15 mins" value="{{ form.prep_time }}">
                        </div>
                        <div class="form-group">
                            <label for="cook_time" class="form-label">Cook Time *</label>
                            <input type="text" id="cook_time" name="cook_time" class="form-input" required
                                   placeholder="25 mins" value="{{ form.cook_time }}">
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="categories" class="form-label">Categories</label>
                        <input type="text" id="categories" name="categories" class="form-input"
                               placeholder="dinner, italian, pasta" value="{{ form.categories }}">
                        <div class="help-text">Separate multiple categories with commas</div>
                    </div>

                    <h2 class="text-2xl font-bold mb-6 mt-8 text-gray-200">Ingredients</h2>
                    <div class="form-group">
                        <label for="ingredients" class="form-label">Ingredients *</label>
                        <textarea id="ingredients" name="ingredients" class="form-textarea" required style="min-height: 200px;"
                                  placeholder="all-purpose flour: 2 cups">{{ form.ingredients }}</textarea>
                        <div class="help-text">Enter one ingredient per line in format: "ingredient name: amount"</div>
                    </div>

                    <h2 class="text-2xl font-bold mb-6 mt-8 text-gray-200">Directions</h2>
                    <div class="form-group">
                        <label for="directions" class="form-label">Instructions *</label>
                        <textarea id="directions" name="directions" class="form-textarea" required style="min-height: 250px;"
                                  placeholder="Preheat oven to 375°F (190°C).">{{ form.directions }}</textarea>
                        <div class="help-text">Enter one step per line. Steps will be automatically numbered.</div>
                    </div>

                    <h2 class="text-2xl font-bold mb-6 mt-8 text-gray-200">Additional Notes</h2>
                    <div class="form-group">
                        <label for="notes" class="form-label">Recipe Notes</label>
                        <textarea id="notes" name="notes" class="form-textarea"
                                  placeholder="Tips, storage instructions, variations...">{{ form.notes }}</textarea>
                    </div>

                    <div class="flex flex-wrap gap-4 mt-8">
                        <button type="submit" name="action" value="preview" class="btn btn-primary">Preview Recipe</button>
                        <button type="submit" name="action" value="download" class="btn btn-secondary">Download HTML</button>
                    </div>
                </form>
            </div>
        </main>

        <footer class="mt-12 mb-8 text-center text-gray-400">
            <p>&copy; {{ site.year }}{% if site.author %} {{ site.author }}{% endif %} - Recipe Generator</p>
        </footer>
    </div>
</body>
</html>
"##;

/// Build a Tera instance holding the embedded templates.
///
/// Auto-escaping stays on for `.html` templates: every field comes from user
/// input. Pre-rendered fragments are inserted with `| safe`.
pub fn load_templates() -> Result<tera::Tera> {
    let mut tera = tera::Tera::default();
    tera.add_raw_template(RECIPE_TEMPLATE, RECIPE_PAGE)?;
    tera.add_raw_template(FORM_TEMPLATE, FORM_PAGE)?;
    Ok(tera)
}
