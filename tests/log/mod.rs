mod log_renders_graphviz;
