//! Bundled template file contents
//!
//! Twig output tags are written as `\{{ ... }}` so Handlebars emits them
//! untouched.

/// `blocks/{name}/block.json`
pub const BLOCK_JSON: &str = r#"{
    "name": "{{theme_slug}}/{{name}}",
    "title": {{json title}},
    "description": {{json description}},
    "category": {{json category}},
    "icon": {{json icon}},
{{#if keywords}}
    "keywords": {{keywords}},
{{/if}}
    "apiVersion": 3,
    "acf": {
        "mode": "preview",
        "renderCallback": "{{function_name}}"
    },
    "supports": {
        "anchor": {{supports_anchor}},
        "className": {{supports_classname}},
        "align": true,
        "mode": false,
        "jsx": true
    }
}
"#;

/// `blocks/{name}/callback.php`
pub const CALLBACK_PHP: &str = r"<?php
/**
 * {{title}} block render callback
 *
 * @package {{theme_slug}}
 */

use Timber\Timber;

/**
 * Render the {{title}} block.
 *
 * @param array  $block      The block settings and attributes.
 * @param string $content    The block inner HTML (empty).
 * @param bool   $is_preview True during backend preview render.
 * @param int    $post_id    The post ID the block is rendering content against.
 */
function {{function_name}}( $block, $content = '', $is_preview = false, $post_id = 0 ) {
{{#if include_js}}
	wp_enqueue_script(
		'{{theme_slug}}-{{name}}',
		get_stylesheet_directory_uri() . '/blocks/{{name}}/{{name}}.js',
		array(),
		wp_get_theme()->get( 'Version' ),
		true
	);

{{/if}}
{{#if include_css}}
	wp_enqueue_style(
		'{{theme_slug}}-{{name}}',
		get_stylesheet_directory_uri() . '/blocks/{{name}}/{{name}}.css',
		array(),
		wp_get_theme()->get( 'Version' )
	);

{{/if}}
	${{class_prefix}}_classes = array( '{{name}}' );

	if ( ! empty( $block['className'] ) ) {
		${{class_prefix}}_classes[] = $block['className'];
	}

	if ( ! empty( $block['align'] ) ) {
		${{class_prefix}}_classes[] = 'align' . $block['align'];
	}

	$context               = Timber::context();
	$context['block']      = $block;
	$context['fields']     = get_fields();
	$context['is_preview'] = $is_preview;
	$context['post_id']    = $post_id;
	$context['classes']    = implode( ' ', ${{class_prefix}}_classes );

	Timber::render( 'blocks/{{name}}.twig', $context );
}
";

/// `views/blocks/{name}.twig`
pub const VIEW_TWIG: &str = r#"{#
 # {{title}} block view
 #
 # @package {{theme_slug}}
 #}
<section{% if block.anchor %} id="\{{ block.anchor }}"{% endif %} class="\{{ classes }}">
	{% if is_preview and fields is empty %}
		<p class="{{name}}__placeholder">{{title}}: add content from the block sidebar.</p>
	{% else %}
		<h2 class="{{name}}__title">\{{ fields.title }}</h2>
	{% endif %}
</section>
"#;

/// `blocks/{name}/{name}.js`
pub const SCRIPT_JS: &str = r"/**
 * {{title}} block script
 */
document.addEventListener( 'DOMContentLoaded', () => {
	document.querySelectorAll( '.{{name}}' ).forEach( ( block ) => {
		block.classList.add( 'is-ready' );
	} );
} );
";

/// `blocks/{name}/{name}.css`
pub const STYLE_CSS: &str = r"/**
 * {{title}} block styles
 *
 * @package {{theme_slug}}
 */
.{{name}} {
	display: block;
}

.{{name}}__title {
	margin: 0;
}
";
